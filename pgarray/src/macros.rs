/// Register a compile-time dumper plugin.
///
/// The pattern binds the [`Transformer`](pgarray_adapt::Transformer) creating the dumper.
macro_rules! register_dumper {
    ($kind:expr, $format:expr, |$transformer:ident| $dumper:expr) => {
        inventory::submit! {
            ::pgarray_adapt::DumperPlugin::new($kind, $format, {
                fn create(
                    $transformer: &::pgarray_adapt::Transformer,
                ) -> ::std::sync::Arc<dyn ::pgarray_adapt::Dumper> {
                    ::std::sync::Arc::new($dumper)
                }
                create
            })
        }
    };
}

/// Register a compile-time loader plugin.
///
/// The pattern binds the [`Transformer`](pgarray_adapt::Transformer) creating the loader.
macro_rules! register_loader {
    ($oid:expr, $format:expr, |$transformer:ident| $loader:expr) => {
        inventory::submit! {
            ::pgarray_adapt::LoaderPlugin::new($oid, $format, {
                fn create(
                    $transformer: &::pgarray_adapt::Transformer,
                ) -> ::std::sync::Arc<dyn ::pgarray_adapt::Loader> {
                    ::std::sync::Arc::new($loader)
                }
                create
            })
        }
    };
}

pub(crate) use register_dumper;
pub(crate) use register_loader;
