//! Named dimensions.
//!
//! Every derived dimension is written as a product or quotient of previously named ones, the way it is usually
//! defined in physics (`Force = Mass × Acceleration`). The raw term lists are left unreduced; comparisons reduce
//! them.
//!
//! Angle is its own base dimension here, so `Torque` (energy per radian) differs from `Energy`.

use crate::dimension::{Dim, DivDim, MulDim};
use crate::tags;
use crate::term::Term;
use typenum::P1;

pub use crate::dimension::Dimensionless;

// ─────────────────────────────────────────────────────────────────────────────
// Base quantities
// ─────────────────────────────────────────────────────────────────────────────

/// Time.
pub type Time = Dim<terms![Term<tags::Time, P1>]>;
/// Length.
pub type Length = Dim<terms![Term<tags::Length, P1>]>;
/// Mass.
pub type Mass = Dim<terms![Term<tags::Mass, P1>]>;
/// Electric current.
pub type Current = Dim<terms![Term<tags::Current, P1>]>;
/// Thermodynamic temperature.
pub type Temperature = Dim<terms![Term<tags::Temperature, P1>]>;
/// Luminous intensity.
pub type Luminosity = Dim<terms![Term<tags::Luminosity, P1>]>;
/// Amount of substance.
pub type Amount = Dim<terms![Term<tags::Amount, P1>]>;
/// Currency.
pub type Currency = Dim<terms![Term<tags::Currency, P1>]>;
/// Plane angle.
pub type Angle = Dim<terms![Term<tags::Angle, P1>]>;

/// Frequency (`1/T`).
pub type Frequency = DivDim<Dimensionless, Time>;
/// Area.
pub type Area = MulDim<Length, Length>;
/// Volume.
pub type Volume = MulDim<Area, Length>;

// ─────────────────────────────────────────────────────────────────────────────
// Kinematics
// ─────────────────────────────────────────────────────────────────────────────

/// Height.
pub type Height = Length;
/// Width.
pub type Width = Length;
/// Depth.
pub type Depth = Length;
/// Distance (scalar).
pub type Distance = Length;
/// Displacement (vector).
pub type Displacement = Length;

/// Velocity, `v = s/t`.
pub type Velocity = DivDim<Length, Time>;
/// Speed.
pub type Speed = Velocity;
/// Acceleration, `a = dv/dt`.
pub type Acceleration = DivDim<Velocity, Time>;
/// Jerk, `j = da/dt`.
pub type Jerk = DivDim<Acceleration, Time>;

/// Angular velocity.
pub type AngularVelocity = DivDim<Angle, Time>;
/// Angular acceleration.
pub type AngularAcceleration = DivDim<AngularVelocity, Time>;

// ─────────────────────────────────────────────────────────────────────────────
// Kinetics
// ─────────────────────────────────────────────────────────────────────────────

/// Force, `F = ma`.
pub type Force = MulDim<Mass, Acceleration>;
/// Momentum, `p = mv`.
pub type Momentum = MulDim<Mass, Velocity>;
/// Impulse.
pub type Impulse = Momentum;
/// Moment of inertia.
pub type MomentOfInertia = MulDim<Area, Mass>;
/// Angular momentum.
pub type AngularMomentum = MulDim<MomentOfInertia, AngularVelocity>;
/// Energy (work), `W = F·s`.
pub type Energy = MulDim<Force, Length>;
/// Moment (energy per radian).
pub type Moment = DivDim<Energy, Angle>;
/// Torque.
pub type Torque = Moment;
/// Power.
pub type Power = DivDim<Energy, Time>;
/// Intensity.
pub type Intensity = DivDim<Power, Area>;
/// Area density.
pub type AreaDensity = DivDim<Mass, Area>;

// ─────────────────────────────────────────────────────────────────────────────
// Mechanics and fluids
// ─────────────────────────────────────────────────────────────────────────────

/// Density.
pub type Density = DivDim<Mass, Volume>;
/// Specific volume.
pub type SpecificVolume = DivDim<Volume, Mass>;
/// Pressure.
pub type Pressure = DivDim<Energy, Volume>;
/// Stress.
pub type Stress = Pressure;
/// Strain.
pub type Strain = Dimensionless;
/// Stiffness.
pub type Stiffness = DivDim<Force, Distance>;
/// Dynamic viscosity.
pub type DynamicViscosity = MulDim<Pressure, Time>;
/// Kinematic viscosity.
pub type KinematicViscosity = DivDim<DynamicViscosity, Density>;

/// Mass flow rate.
pub type MassFlowRate = DivDim<Mass, Time>;
/// Volumetric flow rate.
pub type VolumetricFlowRate = DivDim<Volume, Time>;

// ─────────────────────────────────────────────────────────────────────────────
// Thermodynamics
// ─────────────────────────────────────────────────────────────────────────────

/// Entropy.
pub type Entropy = DivDim<Energy, Temperature>;
/// Specific heat capacity.
pub type SpecificHeat = DivDim<Energy, MulDim<Mass, Temperature>>;
/// Specific energy.
pub type SpecificEnergy = DivDim<Energy, Mass>;
/// Heat flux density.
pub type HeatFluxDensity = DivDim<Power, Area>;

// ─────────────────────────────────────────────────────────────────────────────
// Electricity and magnetism
// ─────────────────────────────────────────────────────────────────────────────

/// Electric charge.
pub type Charge = MulDim<Current, Time>;
/// Charge density.
pub type ChargeDensity = DivDim<Charge, Volume>;
/// Electric potential.
pub type ElectricPotential = DivDim<Energy, Charge>;
/// Voltage.
pub type Voltage = ElectricPotential;
/// Electric field strength.
pub type ElectricField = DivDim<Voltage, Length>;
/// Electrical resistance.
pub type Resistance = DivDim<Voltage, Current>;
/// Electrical resistivity.
pub type ElectricalResistivity = MulDim<Resistance, Length>;
/// Impedance (magnitude).
pub type Impedance = Resistance;
/// Electrical conductance.
pub type ElectricalConductance = DivDim<Dimensionless, Resistance>;
/// Magnetic flux density.
pub type MagneticFluxDensity = DivDim<Force, MulDim<Velocity, Charge>>;
/// Magnetic flux.
pub type MagneticFlux = MulDim<MagneticFluxDensity, Area>;
/// Capacitance.
pub type Capacitance = DivDim<Charge, Voltage>;
/// Current density.
pub type CurrentDensity = DivDim<Current, Area>;

// ─────────────────────────────────────────────────────────────────────────────
// Chemistry
// ─────────────────────────────────────────────────────────────────────────────

/// Chemical potential.
pub type ChemicalPotential = DivDim<Energy, Amount>;
/// Concentration.
pub type Concentration = DivDim<Amount, Volume>;
