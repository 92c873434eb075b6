mod about;
mod contact;
mod footer;
mod hero;
mod navigation;
mod projects;
mod skills;
mod timeline;

pub use about::About;
pub use contact::ContactSection;
pub use footer::Footer;
pub use hero::Hero;
pub use navigation::Navigation;
pub use projects::Projects;
pub use skills::Skills;
pub use timeline::Timeline;
