//! The call boundary between the bridge and the remote renderer.
//!
//! The renderer lives behind an interop layer that only moves scalars and
//! string handles. It cannot return a bitmap from its entry point, so it
//! pushes results back through [`RendererCallbacks`] before the call returns.
//!
//! Implementations of [`CallBoundary`] own the actual transport. The bridge
//! only needs four primitives from it: resolve a static method, create and
//! release string handles, and make a blocking void call.

use crate::error::BoundaryError;

/// Opaque id of a resolved static method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MethodId(pub u64);

/// Opaque handle to a string living on the remote side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StringHandle(pub u64);

/// One argument in a boundary call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundaryValue {
    String(StringHandle),
    Int(i32),
    Float(f32),
    Bool(bool),
}

impl BoundaryValue {
    pub fn as_string(self) -> Option<StringHandle> {
        match self {
            BoundaryValue::String(handle) => Some(handle),
            _ => None,
        }
    }

    pub fn as_int(self) -> Option<i32> {
        match self {
            BoundaryValue::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_float(self) -> Option<f32> {
        match self {
            BoundaryValue::Float(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(self) -> Option<bool> {
        match self {
            BoundaryValue::Bool(v) => Some(v),
            _ => None,
        }
    }
}

/// Callbacks the remote renderer invokes while a render call is in flight.
pub trait RendererCallbacks {
    /// Clear link regions and padding.
    fn reset(&mut self);

    /// Hand over the rendered bitmap. `pixels` is `None` for size-only requests.
    fn deliver_bitmap(&mut self, width: i32, height: i32, pixels: Option<&[u8]>);

    #[allow(clippy::too_many_arguments)]
    fn deliver_link_meta(
        &mut self,
        normal_bg: i32,
        selected_bg: i32,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        tag: i32,
    );

    fn deliver_padding(&mut self, x: f32, y: f32);

    /// Resolve a file name to a full path with the engine's file lookup.
    fn resolve_path(&self, name: &str) -> String;
}

/// Transport to the remote renderer.
pub trait CallBoundary {
    fn lookup_static_method(
        &self,
        class: &str,
        method: &str,
        signature: &str,
    ) -> Result<MethodId, BoundaryError>;

    fn new_string(&self, value: &str) -> Result<StringHandle, BoundaryError>;

    fn release_string(&self, handle: StringHandle);

    /// Blocking call. Every callback happens on this thread before it returns.
    fn call_static_void(
        &self,
        method: MethodId,
        args: &[BoundaryValue],
        callbacks: &mut dyn RendererCallbacks,
    ) -> Result<(), BoundaryError>;
}

/// String handle released when dropped.
pub struct LocalString<'a, B: CallBoundary + ?Sized> {
    boundary: &'a B,
    handle: StringHandle,
}

impl<'a, B: CallBoundary + ?Sized> LocalString<'a, B> {
    pub fn new(boundary: &'a B, value: &str) -> Result<Self, BoundaryError> {
        let handle = boundary.new_string(value)?;
        Ok(Self { boundary, handle })
    }

    pub fn handle(&self) -> StringHandle {
        self.handle
    }
}

impl<B: CallBoundary + ?Sized> Drop for LocalString<'_, B> {
    fn drop(&mut self) {
        self.boundary.release_string(self.handle);
    }
}

/// Class holding the render entry point.
pub const RENDER_CLASS: &str = "org/cocos2dx/lib/RichLabelBitmap";
/// Name of the render entry point.
pub const RENDER_METHOD: &str = "createRichLabelBitmap";
/// Signature matching [`RenderArgs::to_values`].
pub const RENDER_SIGNATURE: &str = "(Ljava/lang/String;Ljava/lang/String;IFFFIIIZFFIFZFFFFFZ)V";
/// Number of arguments the entry point takes.
pub const RENDER_ARG_COUNT: usize = 21;

/// Typed view of the render entry point's argument list, in wire order.
///
/// Values here are already in the renderer's conventions: the shadow Y
/// offset is flipped and the font path is stripped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderArgs {
    pub text: StringHandle,
    pub font_path: StringHandle,
    pub font_size: i32,
    pub tint: [f32; 3],
    pub align: i32,
    pub max_width: i32,
    pub max_height: i32,
    pub shadow: bool,
    pub shadow_dx: f32,
    pub shadow_dy: f32,
    pub shadow_color: i32,
    pub shadow_blur: f32,
    pub stroke: bool,
    pub stroke_color: [f32; 3],
    pub stroke_size: f32,
    pub content_scale: f32,
    pub size_only: bool,
}

impl RenderArgs {
    pub fn to_values(&self) -> [BoundaryValue; RENDER_ARG_COUNT] {
        use BoundaryValue::*;
        [
            String(self.text),
            String(self.font_path),
            Int(self.font_size),
            Float(self.tint[0]),
            Float(self.tint[1]),
            Float(self.tint[2]),
            Int(self.align),
            Int(self.max_width),
            Int(self.max_height),
            Bool(self.shadow),
            Float(self.shadow_dx),
            Float(self.shadow_dy),
            Int(self.shadow_color),
            Float(self.shadow_blur),
            Bool(self.stroke),
            Float(self.stroke_color[0]),
            Float(self.stroke_color[1]),
            Float(self.stroke_color[2]),
            Float(self.stroke_size),
            Float(self.content_scale),
            Bool(self.size_only),
        ]
    }

    /// Decode an argument list. `None` on wrong arity or a mistyped slot.
    pub fn from_values(values: &[BoundaryValue]) -> Option<Self> {
        let [
            text,
            font_path,
            font_size,
            tint_r,
            tint_g,
            tint_b,
            align,
            max_width,
            max_height,
            shadow,
            shadow_dx,
            shadow_dy,
            shadow_color,
            shadow_blur,
            stroke,
            stroke_r,
            stroke_g,
            stroke_b,
            stroke_size,
            content_scale,
            size_only,
        ] = values
        else {
            return None;
        };

        Some(Self {
            text: text.as_string()?,
            font_path: font_path.as_string()?,
            font_size: font_size.as_int()?,
            tint: [tint_r.as_float()?, tint_g.as_float()?, tint_b.as_float()?],
            align: align.as_int()?,
            max_width: max_width.as_int()?,
            max_height: max_height.as_int()?,
            shadow: shadow.as_bool()?,
            shadow_dx: shadow_dx.as_float()?,
            shadow_dy: shadow_dy.as_float()?,
            shadow_color: shadow_color.as_int()?,
            shadow_blur: shadow_blur.as_float()?,
            stroke: stroke.as_bool()?,
            stroke_color: [stroke_r.as_float()?, stroke_g.as_float()?, stroke_b.as_float()?],
            stroke_size: stroke_size.as_float()?,
            content_scale: content_scale.as_float()?,
            size_only: size_only.as_bool()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn sample_args() -> RenderArgs {
        RenderArgs {
            text: StringHandle(1),
            font_path: StringHandle(2),
            font_size: 12,
            tint: [1.0, 0.5, 0.0],
            align: 0x33,
            max_width: 100,
            max_height: 50,
            shadow: true,
            shadow_dx: 2.0,
            shadow_dy: -5.0,
            shadow_color: 0x7f000000,
            shadow_blur: 1.5,
            stroke: false,
            stroke_color: [0.0; 3],
            stroke_size: 0.0,
            content_scale: 2.0,
            size_only: false,
        }
    }

    #[test]
    fn test_values_follow_signature() {
        let values = sample_args().to_values();
        let codes: String = values
            .iter()
            .map(|value| match value {
                BoundaryValue::String(_) => "Ljava/lang/String;",
                BoundaryValue::Int(_) => "I",
                BoundaryValue::Float(_) => "F",
                BoundaryValue::Bool(_) => "Z",
            })
            .collect();
        assert_eq!(format!("({})V", codes), RENDER_SIGNATURE);
    }

    #[test]
    fn test_decode_matches_encode() {
        let args = sample_args();
        assert_eq!(RenderArgs::from_values(&args.to_values()), Some(args));
    }

    #[test]
    fn test_decode_rejects_bad_lists() {
        let values = sample_args().to_values();
        assert!(RenderArgs::from_values(&values[..20]).is_none());

        let mut mistyped = values;
        mistyped[2] = BoundaryValue::Float(12.0);
        assert!(RenderArgs::from_values(&mistyped).is_none());
    }

    struct CountingBoundary {
        released: RefCell<Vec<StringHandle>>,
    }

    impl CallBoundary for CountingBoundary {
        fn lookup_static_method(
            &self,
            _: &str,
            _: &str,
            _: &str,
        ) -> Result<MethodId, BoundaryError> {
            Ok(MethodId(0))
        }

        fn new_string(&self, value: &str) -> Result<StringHandle, BoundaryError> {
            Ok(StringHandle(value.len() as u64))
        }

        fn release_string(&self, handle: StringHandle) {
            self.released.borrow_mut().push(handle);
        }

        fn call_static_void(
            &self,
            _: MethodId,
            _: &[BoundaryValue],
            _: &mut dyn RendererCallbacks,
        ) -> Result<(), BoundaryError> {
            Ok(())
        }
    }

    #[test]
    fn test_local_string_releases_on_drop() {
        let boundary = CountingBoundary {
            released: RefCell::new(Vec::new()),
        };
        {
            let local = LocalString::new(&boundary, "abc").unwrap();
            assert_eq!(local.handle(), StringHandle(3));
            assert!(boundary.released.borrow().is_empty());
        }
        assert_eq!(*boundary.released.borrow(), vec![StringHandle(3)]);
    }
}
