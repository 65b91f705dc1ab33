/// Base trait for thermodynamic property models.
///
/// The associated `Fluid` type is carried by every [`State`](crate::support::thermo::State)
/// the model produces or accepts.
pub trait ThermoModel {
    type Fluid;
}
