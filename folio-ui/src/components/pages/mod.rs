mod about;
mod contact;
mod home;
mod services;
mod work;

pub use about::AboutView;
pub use contact::ContactView;
pub use home::HomeView;
pub use services::ServicesView;
pub use work::WorkView;
