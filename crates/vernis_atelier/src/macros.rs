//! Declarative helpers shared by the component modules.

/// Declare a closed set of variant values backed by a variant table axis.
///
/// Generates `as_str`, `from_name`, `ALL` and `Display`. Mark the default
/// value with `#[default]`.
macro_rules! variant_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Table key of this value.
            #[inline]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $value),+
                }
            }

            /// Parse a table key. Unknown keys yield `None`.
            #[inline]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($value => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Builder methods common to every wrapper holding a `base: WrapperBase` field.
macro_rules! wrapper_builders {
    ($name:ident) => {
        impl $name {
            /// Extra classes, merged after the resolved variant classes.
            pub fn class(mut self, class: impl Into<vernis_carton::CompactString>) -> Self {
                self.base.class = Some(class.into());
                self
            }

            /// Set one pass-through attribute.
            pub fn attr(
                mut self,
                name: impl Into<vernis_carton::CompactString>,
                value: impl Into<vernis_relief::PropValue>,
            ) -> Self {
                self.base.attrs.set(name, value);
                self
            }

            /// Merge a prop bag into the pass-through attributes.
            pub fn attrs(mut self, attrs: &vernis_relief::Props) -> Self {
                self.base.attrs.merge(attrs);
                self
            }

            /// Forward a ref to the rendered element.
            pub fn node_ref(mut self, node_ref: vernis_relief::NodeRef) -> Self {
                self.base.node_ref = Some(node_ref);
                self
            }

            pub fn child(mut self, child: impl Into<vernis_relief::Node>) -> Self {
                let child = child.into();
                if !child.is_empty() {
                    self.base.children.push(child);
                }
                self
            }

            pub fn children(mut self, children: impl IntoIterator<Item = vernis_relief::Node>) -> Self {
                self.base.children.extend(children);
                self
            }

            /// Wrap into a render tree node.
            pub fn into_node(self) -> vernis_relief::Node {
                vernis_relief::Node::component(self)
            }
        }

        impl From<$name> for vernis_relief::Node {
            fn from(component: $name) -> Self {
                vernis_relief::Node::component(component)
            }
        }
    };
}

/// A styled part with no variants: a fixed class on a fixed tag.
macro_rules! styled_part {
    (
        $(#[$meta:meta])*
        $name:ident {
            slot: $slot:literal,
            tag: $tag:literal,
            class: $class:literal,
            pass_through: [$($prop:literal),* $(,)?] $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            base: $crate::wrapper::WrapperBase,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }
        }

        impl $crate::wrapper::Wrapper for $name {
            const CONTRACT: $crate::wrapper::WrapperContract = $crate::wrapper::WrapperContract {
                display_name: stringify!($name),
                slot: $slot,
                tag: $tag,
                pass_through: &[$($prop),*],
            };
        }

        wrapper_builders!($name);

        impl vernis_relief::Component for $name {
            fn display_name(&self) -> &'static str {
                <Self as $crate::wrapper::Wrapper>::CONTRACT.display_name
            }

            fn render(&self, _cx: &vernis_relief::RenderContext) -> vernis_relief::Node {
                let contract = <Self as $crate::wrapper::Wrapper>::CONTRACT;
                let class = self.base.merge_class($class);
                self.base.host(&contract, &class, false).build()
            }
        }
    };
}
