/// Declare the page's global signal store from one table.
///
/// Expands to a `Globals` struct with one `RwSignal` per row, the
/// `OnceCell` holding it, `init_globals(seed)` building each signal from
/// its initializer, and one accessor per row. Attributes on a row (doc
/// comments included) are kept on its accessor.
///
/// ```ignore
/// global_signals! {
///     seed defaults: SearchDefaults;
///     /// Current filter inputs
///     pub fn search_criteria() -> criteria: FilterCriteria = defaults.criteria;
/// }
/// ```
#[macro_export]
macro_rules! global_signals {
    (
        seed $seed:ident : $seed_ty:ty;
        $( $(#[$meta:meta])* $vis:vis fn $name:ident() -> $field:ident : $ty:ty = $init:expr; )+
    ) => {
        pub struct Globals {
            $( pub $field: ::leptos::RwSignal<$ty>, )+
        }

        static GLOBALS: ::once_cell::sync::OnceCell<Globals> = ::once_cell::sync::OnceCell::new();

        /// Seed the globals. No effect once they exist.
        pub fn init_globals($seed: $seed_ty) -> &'static Globals {
            GLOBALS.get_or_init(|| Globals {
                $( $field: ::leptos::create_rw_signal($init), )+
            })
        }

        $(
            $(#[$meta])*
            $vis fn $name() -> ::leptos::RwSignal<$ty> {
                $crate::global_state::globals().$field
            }
        )+
    };
}
