#[macro_use]
extern crate approx;

mod closest_point_of_approach;
