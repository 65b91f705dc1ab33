/// Canonical identifier for water and steam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Water;

#[cfg(feature = "coolprop")]
impl crate::support::thermo::model::coolprop::CoolPropFluid for Water {
    const BACKEND: &'static str = "HEOS";
    const NAME: &'static str = "Water";
}
