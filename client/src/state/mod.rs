//! Client-side state modules.
//!
//! DESIGN
//! ======
//! The widget keeps one controller per mount. Components read it through a
//! signal and change it only through its transition methods.

pub mod chatbot;
