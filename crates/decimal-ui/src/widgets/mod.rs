pub mod analog_clock;
pub mod column;
pub mod digital_readout;
pub mod progress_ring;
pub mod text;
pub mod time_comparison;
