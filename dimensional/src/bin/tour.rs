//! Dimensional Tour Binary
//!
//! Walks through the dimension engine and logs what it finds: type-level predicates evaluated at compile time,
//! then run-time unit arithmetic on top of them.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin dimensional-tour --features demo
//! RUST_LOG=debug cargo run --bin dimensional-tour --features demo
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info)

#![recursion_limit = "256"]

use std::any::type_name;
use std::env;

use anyhow::ensure;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use dimensional::quantities::{Acceleration, Energy, Force, Length, Mass, Power, Time, Torque};
use dimensional::typenum::{N1, N2, P1, P2};
use dimensional::unit::symbol;
use dimensional::{
    contains_term, dim, has_base_dimension, same_dimension, tags, Centimeters, Dimension, DivDim, Kilograms,
    Meters, MetersPerSecond, MulDim, Second, Standard, Term,
};

type SpelledForce = dim![Term<tags::Length, P1>, Term<tags::Mass, P1>, Term<tags::Time, N2>];
type TimeSquaredLengthSquared = dim![Term<tags::Time, P2>, Term<tags::Length, P2>];
type LengthSquaredTimeSquared = dim![Term<tags::Length, P2>, Term<tags::Time, P2>];

const FORCE_MATCHES: bool = same_dimension::<Force, SpelledForce>();
const FORCE_HAS_INVERSE_SQUARE_TIME: bool = contains_term::<Force, Term<tags::Time, N2>>();
const FORCE_HAS_INVERSE_TIME: bool = contains_term::<Force, Term<tags::Time, N1>>();

fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting dimensional tour");

    dimensions()?;
    quantities()?;

    info!("Tour finished");
    Ok(())
}

fn dimensions() -> anyhow::Result<()> {
    info!(
        length_in_l = has_base_dimension::<Length, tags::Length>(),
        time_in_l = has_base_dimension::<Length, tags::Time>(),
        mass_in_t2l2 = has_base_dimension::<TimeSquaredLengthSquared, tags::Mass>(),
        time_in_t2l2 = has_base_dimension::<TimeSquaredLengthSquared, tags::Time>(),
        "Containment"
    );
    info!(
        t2l2_eq_l2t2 = same_dimension::<TimeSquaredLengthSquared, LengthSquaredTimeSquared>(),
        t2l2_eq_l_l = same_dimension::<TimeSquaredLengthSquared, MulDim<Length, Length>>(),
        "Equality"
    );

    info!(product = type_name::<MulDim<Length, Length>>(), "Length × Length");
    info!(quotient = type_name::<DivDim<Length, Time>>(), "Length ÷ Time");
    debug!(canonical = type_name::<<Force as Dimension>::Canonical>(), "Force canonical terms");

    info!(force = %Force::new(), spelled = %SpelledForce::new(), "Force written two ways");
    info!(same = FORCE_MATCHES, "M·L·T^-2 == L·M·T^-2");
    info!(contains = FORCE_HAS_INVERSE_SQUARE_TIME, "Force contains T^-2");
    info!(contains = FORCE_HAS_INVERSE_TIME, "Force contains T^-1");

    let energy_is_work = same_dimension::<Energy, MulDim<Force, Length>>();
    let energy_is_torque = same_dimension::<Energy, Torque>();
    info!(energy_is_work, energy_is_torque, "Energy comparisons");
    info!(power = %Power::new(), acceleration = %Acceleration::new(), "Derived signatures");

    ensure!(FORCE_MATCHES, "force spelled in another order should match");
    ensure!(!FORCE_HAS_INVERSE_TIME, "force should not contain T^-1");
    ensure!(same_dimension::<MulDim<Mass, Acceleration>, Force>(), "F = m·a");
    ensure!(
        same_dimension::<TimeSquaredLengthSquared, LengthSquaredTimeSquared>(),
        "term order must not matter"
    );
    ensure!(!same_dimension::<Time, Length>(), "time and length must differ");
    Ok(())
}

fn quantities() -> anyhow::Result<()> {
    let height = Centimeters::new(168.0) + Centimeters::new(15.0);
    info!(%height, "168 cm + 15 cm");

    let mixed = Meters::new(1.0) + Centimeters::new(50.0);
    info!(%mixed, "1 m + 50 cm");

    let mass = Kilograms::new(20.0) * 3.0;
    info!(%mass, "20 kg × 3");

    let time = (Meters::new(100.0) / MetersPerSecond::new(20.0)).to::<Second>();
    info!(%time, "100 m ÷ 20 m/s");

    let weight = Kilograms::new(80.0) * MetersPerSecond::new(9.81) / time;
    info!(%weight, unit = %symbol::<Standard<Force>>(), "80 kg × 9.81 m/s ÷ 5 s");

    ensure!((height.value() - 183.0).abs() < 1e-9, "unexpected height {height}");
    ensure!((time.value() - 5.0).abs() < 1e-12, "unexpected time {time}");
    Ok(())
}
