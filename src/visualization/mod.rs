pub mod viewport;
pub mod orbsim_vis2d;
