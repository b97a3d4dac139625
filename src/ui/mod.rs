/// Interactive CLI shell over the session state.

pub mod menu;
