//! Method registry: the typed replacement for invoke-by-name reflection.
//!
//! Each entity category owns one registry mapping method names to handler
//! functions. Registries are built once at startup, so an unknown method is
//! nothing more than a map-lookup miss at invocation time.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::server::{
    dispatch::Category,
    error::dispatch::{DispatchError, InvocationError},
};

/// Future returned by a registered method.
pub type MethodFuture<'a> = Pin<Box<dyn Future<Output = Result<Value, InvocationError>> + Send + 'a>>;

/// A registered method: borrows the resolved entity, the positional
/// arguments, and the database connection (methods may persist or load
/// through the repositories).
pub type Handler<E> = for<'a> fn(&'a E, &'a [Value], &'a DatabaseConnection) -> MethodFuture<'a>;

/// Name-to-handler map for one entity category.
pub struct MethodRegistry<E> {
    methods: HashMap<&'static str, Handler<E>>,
}

impl<E> MethodRegistry<E> {
    pub fn new() -> Self {
        Self {
            methods: HashMap::new(),
        }
    }

    /// Registers a handler under its public method name.
    pub fn register(&mut self, name: &'static str, handler: Handler<E>) {
        self.methods.insert(name, handler);
    }

    /// Names of all registered methods, in no particular order.
    pub fn method_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.methods.keys().copied()
    }

    /// Invokes a method by name on a resolved entity.
    ///
    /// Arguments are applied positionally with no shape validation; a
    /// handler reports its own argument failures through `InvocationError`.
    ///
    /// # Arguments
    /// - `category` - Category of the target, used in failure messages
    /// - `target` - The resolved entity
    /// - `method` - Public method name
    /// - `args` - Positional arguments
    /// - `db` - Connection the method may use for its own persistence
    ///
    /// # Returns
    /// - `Ok(Value)` - The method's result payload
    /// - `Err(DispatchError::MethodNotFound)` - No handler under that name
    /// - `Err(DispatchError::Invocation)` - The method failed; original detail attached
    pub async fn invoke(
        &self,
        category: Category,
        target: &E,
        method: &str,
        args: &[Value],
        db: &DatabaseConnection,
    ) -> Result<Value, DispatchError> {
        let handler = self
            .methods
            .get(method)
            .ok_or_else(|| DispatchError::MethodNotFound {
                category,
                method: method.to_string(),
            })?;

        handler(target, args, db)
            .await
            .map_err(|source| DispatchError::Invocation {
                category,
                method: method.to_string(),
                source,
            })
    }
}

impl<E> Default for MethodRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}
