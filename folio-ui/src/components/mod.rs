pub mod app_layout;
pub mod background;
pub mod button;
pub mod footer;
pub mod header;
pub mod icons;
pub mod page_view;
pub mod pages;
pub mod reveal;
pub mod segmented_control;
pub mod service_card;
pub mod stat_counter;
pub mod success_toast;
pub mod text_input;

pub use app_layout::SiteLayoutView;
pub use background::BackgroundScene;
pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use footer::SiteFooterView;
pub use header::{nav_items, NavItem, SiteHeaderView};
pub use page_view::PageView;
pub use pages::{AboutView, ContactView, HomeView, ServicesView, WorkView};
pub use reveal::Reveal;
pub(crate) use reveal::join_style;
pub use segmented_control::CategoryFilterControl;
pub use service_card::ServiceCard;
pub use stat_counter::StatCounter;
pub use success_toast::SuccessToast;
pub use text_input::FormField;
