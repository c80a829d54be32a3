pub mod animation;
pub mod constants;
pub mod error;
pub mod kinematics;
pub mod planet;
pub mod plot;
pub mod report;
pub mod run;
pub mod session;
pub mod viewer;
pub mod window;
