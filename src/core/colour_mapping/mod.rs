pub mod warm_ramp;
