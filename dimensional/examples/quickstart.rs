//! Minimal end-to-end example: convert temperatures, combine mixed units and derive a force.

#![recursion_limit = "256"]

use dimensional::quantities::{Force, Velocity};
use dimensional::{
    same_dimension, Celsius, Centimeters, DegreesFahrenheit, Kilograms, MetersPerSecond, Newton, Seconds, Standard,
};

fn main() {
    let boiling = DegreesFahrenheit::new(212.0).to::<Celsius>();
    assert!((boiling.value() - 100.0_f64).abs() < 1e-9);

    let height = Centimeters::new(168.0) + Centimeters::new(15.0);
    println!("height: {height}");

    let force = (Kilograms::new(80.0) * MetersPerSecond::new(9.81) / Seconds::new(1.0)).to::<Newton>();
    println!("weight: {force:.1}");
    assert!((force.value() - 784.8_f64).abs() < 1e-9);

    let speed = MetersPerSecond::new(20.0).to::<Standard<Velocity>>();
    println!("speed: {speed}");

    assert!(!same_dimension::<Force, Velocity>());
}
