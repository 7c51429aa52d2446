/// Generate accessors returning signals stored in [`Globals`](crate::global_state::Globals).
///
/// Usage:
/// `global_signals! {
///     pub session => session: SessionState,
///     summary => inventory_summary: InventorySummary,
/// }`
#[macro_export]
macro_rules! global_signals {
    ( $( $vis:vis $name:ident => $field:ident : $ty:ty ),+ $(,)? ) => {
        $(
            $vis fn $name() -> ::leptos::RwSignal<$ty> {
                $crate::global_state::globals().$field
            }
        )+
    };
}
