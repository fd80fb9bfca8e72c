use std::sync::Arc;

use crate::{Double, Value};

/// Concrete behavior retained on a double. The `&Double` parameter lets a
/// body delegate to sibling methods through the double itself.
pub(crate) type MethodBody = Arc<dyn Fn(&Double, &[Value]) -> Value + Send + Sync>;

/// Which creation primitive a target resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoubleKind {
    /// Every method stubbed
    Full,
    /// Bodyless members stubbed, concrete bodies retained
    Abstract,
    /// Concrete methods keep their original behavior
    Trait,
}

/// Describes a type to double: its facets and its methods. This stands in
/// for a reflection probe of the target type.
pub struct TypeDescriptor {
    pub(crate) name: &'static str,
    is_interface: bool,
    is_abstract: bool,
    is_trait: bool,
    pub(crate) methods: Vec<MethodDescriptor>,
}

pub(crate) struct MethodDescriptor {
    pub(crate) name: &'static str,
    pub(crate) body: Option<MethodBody>,
}

impl TypeDescriptor {
    /// A pure-virtual surface. Reflection reports these as abstract too,
    /// which is why classification checks the interface facet first.
    pub fn interface(name: &'static str) -> Self {
        Self::new(name, true, true, false)
    }

    /// A partial implementation with abstract members.
    pub fn abstract_class(name: &'static str) -> Self {
        Self::new(name, false, true, false)
    }

    /// A reusable bundle of concrete methods mixed into its consumers.
    pub fn trait_like(name: &'static str) -> Self {
        Self::new(name, false, false, true)
    }

    pub fn concrete(name: &'static str) -> Self {
        Self::new(name, false, false, false)
    }

    fn new(name: &'static str, is_interface: bool, is_abstract: bool, is_trait: bool) -> Self {
        Self {
            name,
            is_interface,
            is_abstract,
            is_trait,
            methods: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declares a method without a body: an interface method or an abstract
    /// member.
    pub fn method(mut self, name: &'static str) -> Self {
        self.methods.push(MethodDescriptor { name, body: None });
        self
    }

    /// Declares a method with concrete behavior.
    pub fn method_with(
        mut self,
        name: &'static str,
        body: impl Fn(&Double, &[Value]) -> Value + Send + Sync + 'static,
    ) -> Self {
        self.methods.push(MethodDescriptor {
            name,
            body: Some(Arc::new(body)),
        });
        self
    }

    /// Classifies the target. Interface classification takes precedence over
    /// abstract, abstract over trait.
    pub fn kind(&self) -> DoubleKind {
        if !self.is_interface && self.is_abstract {
            DoubleKind::Abstract
        } else if self.is_trait {
            DoubleKind::Trait
        } else {
            DoubleKind::Full
        }
    }
}
