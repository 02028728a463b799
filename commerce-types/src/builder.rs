//! Builder machinery shared by every DTO.
//!
//! Each builder holds a private instance of its target, is created with
//! `init`, exposes one chained setter per field and hands out copies through
//! `build`. The builders themselves are generated by [`dto_builder!`] so that
//! all of them have exactly the same shape.

/// Common interface of all generated builders.
pub trait DtoBuilder {
    /// The DTO this builder produces.
    type Output: Clone;

    /// The instance accumulated so far.
    fn instance(&self) -> &Self::Output;

    /// Returns a deep copy of the accumulated instance.
    ///
    /// Later setter calls on the builder never affect a value returned here.
    fn build(&self) -> Self::Output {
        self.instance().clone()
    }
}

/// Generates a builder for a DTO.
///
/// Every field of the target must be listed in exactly one section:
///
/// - `required`: passed to `init`, setter accepts `impl Into<T>`;
/// - `optional`: an `Option<T>` field, setter accepts `impl Into<T>` and stores `Some`;
/// - `nullable`: a `Nullable<T>` field, setter accepts `impl Into<Nullable<T>>`
///   so either a value or `Nullable::Null` can be passed;
/// - `defaulted`: any `Default` field (lists, maps), setter accepts `impl Into<T>`.
///
/// Sections may be omitted but must appear in that order.
macro_rules! dto_builder {
    (
        $(#[$meta:meta])*
        $builder:ident => $target:ident {
            $(required { $($req:ident : $req_ty:ty),* $(,)? })?
            $(optional { $($opt:ident : $opt_ty:ty),* $(,)? })?
            $(nullable { $($nul:ident : $nul_ty:ty),* $(,)? })?
            $(defaulted { $($def:ident : $def_ty:ty),* $(,)? })?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $builder {
            inner: $target,
        }

        impl $builder {
            #[doc = concat!("Starts a new [`", stringify!($target), "`].")]
            pub fn init($($($req: impl Into<$req_ty>),*)?) -> Self {
                Self {
                    inner: $target {
                        $($($req: $req.into(),)*)?
                        $($($opt: None,)*)?
                        $($($nul: $crate::Nullable::Unset,)*)?
                        $($($def: Default::default(),)*)?
                    },
                }
            }

            $($(
                #[doc = concat!("Sets `", stringify!($req), "`.")]
                #[must_use]
                pub fn $req(mut self, $req: impl Into<$req_ty>) -> Self {
                    self.inner.$req = $req.into();
                    self
                }
            )*)?

            $($(
                #[doc = concat!("Sets `", stringify!($opt), "`.")]
                #[must_use]
                pub fn $opt(mut self, $opt: impl Into<$opt_ty>) -> Self {
                    self.inner.$opt = Some($opt.into());
                    self
                }
            )*)?

            $($(
                #[doc = concat!("Sets `", stringify!($nul), "`; pass `Nullable::Null` to send an explicit null.")]
                #[must_use]
                pub fn $nul(mut self, $nul: impl Into<$crate::Nullable<$nul_ty>>) -> Self {
                    self.inner.$nul = $nul.into();
                    self
                }
            )*)?

            $($(
                #[doc = concat!("Sets `", stringify!($def), "`.")]
                #[must_use]
                pub fn $def(mut self, $def: impl Into<$def_ty>) -> Self {
                    self.inner.$def = $def.into();
                    self
                }
            )*)?

            #[doc = concat!("Returns a copy of the [`", stringify!($target), "`] built so far.")]
            pub fn build(&self) -> $target {
                $crate::builder::DtoBuilder::build(self)
            }
        }

        impl $crate::builder::DtoBuilder for $builder {
            type Output = $target;

            fn instance(&self) -> &$target {
                &self.inner
            }
        }

        impl $target {
            #[doc = concat!("Shortcut for [`", stringify!($builder), "::init`].")]
            pub fn builder($($($req: impl Into<$req_ty>),*)?) -> $builder {
                $builder::init($($($req),*)?)
            }
        }
    };
}

pub(crate) use dto_builder;
