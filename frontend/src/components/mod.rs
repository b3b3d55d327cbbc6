// Yew components mounted into server-rendered pages.

pub mod notification_center;
