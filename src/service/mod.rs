pub mod nudge;
