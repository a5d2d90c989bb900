pub mod breakpoint;
pub mod is_mobile;
pub mod textarea;
pub mod viewport;

pub use breakpoint::MOBILE_BREAKPOINT;
pub use is_mobile::{
    provide_is_mobile, provide_is_mobile_with, use_is_mobile, use_is_mobile_with,
    use_viewport_below, IsMobile,
};
pub use viewport::{BrowserViewport, ListenerId, SimulatedViewport, ViewportHost};
