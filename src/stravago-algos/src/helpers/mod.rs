pub mod week_math;
