use std::{cell::RefCell, collections::HashMap};

use blogsite_shared::notification::{FollowUp, Notice, NoticeId, NotificationBoard, Severity, Step};
use gloo_timers::callback::Timeout;
use yew::{html::Scope, prelude::*, AppHandle};

use crate::{config, dom};

pub enum NotificationMsg {
    Push { severity: Severity, message: String },
    Advance(NoticeId, Step),
}

/// Renders every live notice into the shared container.
///
/// Timers belong to the notice they were armed for; dropping them on removal
/// cancels whatever has not fired yet.
pub struct NotificationCenter {
    board: NotificationBoard,
    timers: HashMap<NoticeId, Vec<Timeout>>,
}

impl NotificationCenter {
    fn arm(&mut self, link: &Scope<Self>, follow_up: FollowUp) {
        let link = link.clone();
        let FollowUp {
            id,
            delay_ms,
            step,
        } = follow_up;
        let timer = Timeout::new(delay_ms, move || link.send_message(NotificationMsg::Advance(id, step)));
        self.timers.entry(id).or_default().push(timer);
    }
}

impl Component for NotificationCenter {
    type Message = NotificationMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            board: NotificationBoard::new(),
            timers: HashMap::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            NotificationMsg::Push {
                severity,
                message,
            } => {
                let (_, follow_ups) = self.board.push(severity, message);
                for follow_up in follow_ups {
                    self.arm(ctx.link(), follow_up);
                }
                true
            },
            NotificationMsg::Advance(id, step) => {
                let advanced = self.board.advance(id, step);
                if step == Step::Remove {
                    self.timers.remove(&id);
                }
                match advanced {
                    Ok(follow_up) => {
                        if let Some(follow_up) = follow_up {
                            self.arm(ctx.link(), follow_up);
                        }
                        true
                    },
                    Err(err) => {
                        log::debug!("{err}");
                        false
                    },
                }
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            { for self.board.iter().map(|notice| render_notice(ctx.link(), notice)) }
        }
    }
}

fn render_notice(link: &Scope<NotificationCenter>, notice: &Notice) -> Html {
    let id = notice.id();
    let severity = notice.severity();
    let onclick = link.callback(move |_: MouseEvent| NotificationMsg::Advance(id, Step::Dismiss));

    let class = classes!(
        "notification",
        severity.class_name(),
        notice.is_shown().then_some("show")
    );
    let role = if severity == Severity::Error { "alert" } else { "status" };

    html! {
        <div key={id} class={class} role={role}>
            <div class="notification-icon">
                <i class={classes!("fas", format!("fa-{}", severity.icon()))} aria-hidden="true"></i>
            </div>
            <div class="notification-content">
                { notice.message() }
            </div>
            <button type="button" class="notification-close" aria-label="Close" {onclick}>
                <i class="fas fa-times" aria-hidden="true"></i>
            </button>
        </div>
    }
}

thread_local! {
    static CENTER: RefCell<Option<AppHandle<NotificationCenter>>> = const { RefCell::new(None) };
}

/// Find the shared container, creating it under `<body>` if the page does not
/// have one, and mount the centre into it.
fn mount() -> Option<AppHandle<NotificationCenter>> {
    let document = dom::document()?;
    let selector = format!(".{}", config::NOTIFICATIONS_CONTAINER_CLASS);
    let container = match document.query_selector(&selector).ok().flatten() {
        Some(existing) => existing,
        None => {
            let created = document.create_element("div").ok()?;
            created.set_class_name(config::NOTIFICATIONS_CONTAINER_CLASS);
            document.body()?.append_child(&created).ok()?;
            created
        },
    };
    Some(yew::Renderer::<NotificationCenter>::with_root(container).render())
}

/// Show a transient notification. The container is mounted on first use.
pub fn notify(message: impl Into<String>, severity: Severity) {
    let message = message.into();
    CENTER.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            *slot = mount();
        }
        match slot.as_ref() {
            Some(center) => center.send_message(NotificationMsg::Push {
                severity,
                message,
            }),
            None => log::warn!("no notification area available; dropped {severity}: {message}"),
        }
    });
}
