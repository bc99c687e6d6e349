pub mod procedure;
pub mod site;
pub mod theme;
