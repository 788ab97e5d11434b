// Landing page sections, top to bottom.

mod about;
mod contact;
mod footer;
mod hero;
mod icons;
mod nav;
mod portfolio;
mod services;
mod toast;

pub use about::{About, TrustStats};
pub use contact::ContactSection;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::{CallBar, Nav};
pub use portfolio::{Portfolio, ServiceArea};
pub use services::{Financing, Services};
pub use toast::{ToastHost, Toaster};
