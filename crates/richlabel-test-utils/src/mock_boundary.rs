//! Mock call boundary that runs a scripted renderer in-process.

use std::collections::HashMap;

use parking_lot::Mutex;
use richlabel::{
    BoundaryError, BoundaryValue, CallBoundary, MethodId, RenderArgs, RendererCallbacks,
    StringHandle,
};

/// Records a boundary operation for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryCall {
    LookupStaticMethod {
        class: String,
        method: String,
        signature: String,
    },
    NewString {
        handle: StringHandle,
        value: String,
    },
    ReleaseString {
        handle: StringHandle,
    },
    CallStaticVoid {
        method: MethodId,
        args: Vec<BoundaryValue>,
    },
}

/// A decoded render call as the scripted renderer sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderInvocation {
    pub args: RenderArgs,
    pub text: String,
    pub font_path: String,
}

type Renderer = Box<
    dyn Fn(&RenderInvocation, &mut dyn RendererCallbacks) -> Result<(), BoundaryError>
        + Send
        + Sync,
>;

/// In-process stand-in for the remote renderer.
///
/// Strings created through the boundary are tracked until released, so a
/// test can assert that nothing leaked with [`live_strings`](Self::live_strings).
/// Methods take `&self` and record through `parking_lot::Mutex`, which keeps
/// the mock `Sync` for tests that share one bridge between threads.
pub struct MockBoundary {
    calls: Mutex<Vec<BoundaryCall>>,
    invocations: Mutex<Vec<RenderInvocation>>,
    strings: Mutex<HashMap<StringHandle, String>>,
    next_handle: Mutex<u64>,
    binding_error: Option<String>,
    renderer: Renderer,
}

impl MockBoundary {
    /// Boundary whose renderer returns without delivering anything.
    pub fn new() -> Self {
        Self::with_renderer(|_, _| Ok(()))
    }

    /// Boundary that runs `renderer` for every render call.
    pub fn with_renderer<F>(renderer: F) -> Self
    where
        F: Fn(&RenderInvocation, &mut dyn RendererCallbacks) -> Result<(), BoundaryError>
            + Send
            + Sync
            + 'static,
    {
        Self {
            calls: Mutex::new(Vec::new()),
            invocations: Mutex::new(Vec::new()),
            strings: Mutex::new(HashMap::new()),
            next_handle: Mutex::new(1),
            binding_error: None,
            renderer: Box::new(renderer),
        }
    }

    /// Boundary whose entry point lookup always fails with `reason`.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            binding_error: Some(reason.into()),
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<BoundaryCall> {
        self.calls.lock().clone()
    }

    pub fn invocations(&self) -> Vec<RenderInvocation> {
        self.invocations.lock().clone()
    }

    pub fn last_invocation(&self) -> Option<RenderInvocation> {
        self.invocations.lock().last().cloned()
    }

    /// Number of render calls made.
    pub fn count_render_calls(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, BoundaryCall::CallStaticVoid { .. }))
            .count()
    }

    /// Strings created but not yet released.
    pub fn live_strings(&self) -> usize {
        self.strings.lock().len()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().clear();
        self.invocations.lock().clear();
    }

    fn string_value(&self, handle: StringHandle) -> Result<String, BoundaryError> {
        self.strings
            .lock()
            .get(&handle)
            .cloned()
            .ok_or_else(|| BoundaryError::new(format!("stale string handle {:?}", handle)))
    }
}

impl Default for MockBoundary {
    fn default() -> Self {
        Self::new()
    }
}

impl CallBoundary for MockBoundary {
    fn lookup_static_method(
        &self,
        class: &str,
        method: &str,
        signature: &str,
    ) -> Result<MethodId, BoundaryError> {
        self.calls.lock().push(BoundaryCall::LookupStaticMethod {
            class: class.to_string(),
            method: method.to_string(),
            signature: signature.to_string(),
        });

        match &self.binding_error {
            Some(reason) => Err(BoundaryError::new(reason.clone())),
            None => Ok(MethodId(1)),
        }
    }

    fn new_string(&self, value: &str) -> Result<StringHandle, BoundaryError> {
        let handle = {
            let mut next = self.next_handle.lock();
            let handle = StringHandle(*next);
            *next += 1;
            handle
        };

        self.strings.lock().insert(handle, value.to_string());
        self.calls.lock().push(BoundaryCall::NewString {
            handle,
            value: value.to_string(),
        });
        Ok(handle)
    }

    fn release_string(&self, handle: StringHandle) {
        if self.strings.lock().remove(&handle).is_none() {
            tracing::warn!("released unknown string handle {:?}", handle);
        }
        self.calls.lock().push(BoundaryCall::ReleaseString { handle });
    }

    fn call_static_void(
        &self,
        method: MethodId,
        args: &[BoundaryValue],
        callbacks: &mut dyn RendererCallbacks,
    ) -> Result<(), BoundaryError> {
        self.calls.lock().push(BoundaryCall::CallStaticVoid {
            method,
            args: args.to_vec(),
        });

        let args = RenderArgs::from_values(args)
            .ok_or_else(|| BoundaryError::new("argument list does not match signature"))?;
        let invocation = RenderInvocation {
            args,
            text: self.string_value(args.text)?,
            font_path: self.string_value(args.font_path)?,
        };
        self.invocations.lock().push(invocation.clone());

        (self.renderer)(&invocation, callbacks)
    }
}
