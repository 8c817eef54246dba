//! Wire value model for boundary crossings.
//!
//! The source protocol carries untyped machine words and relies on key-name
//! conventions to reinterpret them. Here the convention is applied exactly
//! once, when a payload enters the crate, and the result is kept as a tagged
//! [`Value`] for the rest of the call; the untyped representation exists only
//! at the literal boundary edge, outside this crate.

use std::cell::RefCell ;
use std::rc::Rc ;

use pipe_trait::Pipe ;



/// Opaque reference to a host-owned entity (scene, object, settings element).
///
/// Handles are forwarded, compared and stored but never dereferenced by the
/// boundary layer; only the host can resolve them.
#[derive( Copy, Clone, Debug, Eq, Hash, PartialEq )]
pub struct Handle( u64 );

impl Handle {
    /// The null handle, used where the protocol needs an empty reference.
    pub const NULL: Handle = Handle( 0 );

    /// Creates a handle from a raw host value.
    pub const fn new( raw: u64 ) -> Self { Self( raw )}

    /// Raw host value of this handle.
    #[inline] pub const fn raw( &self ) -> u64 { self.0 }

    /// Returns `true` for the null handle.
    #[inline] pub const fn is_null( &self ) -> bool { self.0 == 0 }
}

impl std::fmt::Display for Handle {
    fn fmt( &self, f: &mut std::fmt::Formatter ) -> Result<(), std::fmt::Error> {
        write!( f, "#{:x}", self.0 )
    }
}

impl From<Handle> for u64 {
    fn from( handle: Handle ) -> Self { handle.0 }
}

/// A single typed slot in an argument list or positional payload.
///
/// The reader of a slot knows the expected convention from the key name (or
/// the slot position); a slot holding a different variant counts as absent
/// and degrades to the documented default.
#[derive( Clone, Debug, PartialEq )]
pub enum Value {
    /// Boolean flag.
    Bool( bool ),
    /// 32-bit signed integer.
    Int( i32 ),
    /// 32-bit float.
    Float( f32 ),
    /// Owned string.
    Str( String ),
    /// Opaque host handle.
    Handle( Handle ),
    /// Flat integer table, count-prefixed on the wire (`[ count, .. ]`).
    Ints( Vec<i32> ),
    /// Opaque byte payload. Ownership is call-scoped unless the receiving
    /// side documents a hand-off (clipboard buffers).
    Blob( Vec<u8> ),
    /// Output parameter, written by the callee during the call.
    Out( OutSlot ),
}

impl Value {

    /// The boolean in this slot, if the convention matches.
    #[inline] pub fn as_bool( &self ) -> Option<bool> {
        match self { Self::Bool( value ) => Some( *value ), _ => None }
    }

    /// The integer in this slot, if the convention matches.
    #[inline] pub fn as_int( &self ) -> Option<i32> {
        match self { Self::Int( value ) => Some( *value ), _ => None }
    }

    /// The float in this slot, if the convention matches.
    #[inline] pub fn as_float( &self ) -> Option<f32> {
        match self { Self::Float( value ) => Some( *value ), _ => None }
    }

    /// The string in this slot, if the convention matches.
    #[inline] pub fn as_str( &self ) -> Option<&str> {
        match self { Self::Str( value ) => Some( value.as_str() ), _ => None }
    }

    /// The handle in this slot, if the convention matches.
    #[inline] pub fn as_handle( &self ) -> Option<Handle> {
        match self { Self::Handle( value ) => Some( *value ), _ => None }
    }

    /// The flat integer table in this slot, if the convention matches.
    #[inline] pub fn as_ints( &self ) -> Option<&[i32]> {
        match self { Self::Ints( value ) => Some( value.as_slice() ), _ => None }
    }

    /// The byte payload in this slot, if the convention matches.
    #[inline] pub fn as_blob( &self ) -> Option<&[u8]> {
        match self { Self::Blob( value ) => Some( value.as_slice() ), _ => None }
    }

    /// The output slot, if this is an output parameter.
    #[inline] pub fn as_out( &self ) -> Option<&OutSlot> {
        match self { Self::Out( slot ) => Some( slot ), _ => None }
    }

}

impl From<bool> for Value {
    fn from( value: bool ) -> Self { Self::Bool( value )}
}
impl From<i32> for Value {
    fn from( value: i32 ) -> Self { Self::Int( value )}
}
impl From<f32> for Value {
    fn from( value: f32 ) -> Self { Self::Float( value )}
}
impl From<&str> for Value {
    fn from( value: &str ) -> Self { value.to_string().pipe( Self::Str )}
}
impl From<String> for Value {
    fn from( value: String ) -> Self { Self::Str( value )}
}
impl From<Handle> for Value {
    fn from( value: Handle ) -> Self { Self::Handle( value )}
}
impl From<Vec<i32>> for Value {
    fn from( value: Vec<i32> ) -> Self { Self::Ints( value )}
}
impl From<Vec<u8>> for Value {
    fn from( value: Vec<u8> ) -> Self { Self::Blob( value )}
}
impl From<OutSlot> for Value {
    fn from( slot: OutSlot ) -> Self { Self::Out( slot )}
}

/// An output parameter slot.
///
/// The caller creates the slot empty (the pre-initialised null of the wire
/// protocol), places it into the argument list, and reads it back after the
/// call returns. "Key absent" and "key present but no value produced" are
/// therefore both observable as an empty slot, exactly as on the wire.
///
/// Dispatch is single-threaded by contract, so the slot is a plain shared
/// cell; it must not cross threads.
#[derive( Clone, Debug, Default, PartialEq )]
pub struct OutSlot( Rc<RefCell<Option<Value>>> );

impl OutSlot {

    /// Creates an empty slot.
    pub fn new() -> Self { Self::default() }

    /// Writes the slot. The last write before the call returns wins.
    pub fn set( &self, value: impl Into<Value> ) {
        *self.0.borrow_mut() = Some( value.into() );
    }

    /// Returns `true` once the callee has produced a value.
    pub fn is_set( &self ) -> bool { self.0.borrow().is_some() }

    /// Takes the raw value out of the slot, leaving it empty.
    pub fn take( &self ) -> Option<Value> { self.0.borrow_mut().take() }

    /// Takes the value as a boolean; `None` on absence or mismatch.
    pub fn take_bool( &self ) -> Option<bool> {
        match self.take() { Some( Value::Bool( value )) => Some( value ), _ => None }
    }

    /// Takes the value as an integer; `None` on absence or mismatch.
    pub fn take_int( &self ) -> Option<i32> {
        match self.take() { Some( Value::Int( value )) => Some( value ), _ => None }
    }

    /// Takes the value as a string; `None` on absence or mismatch.
    pub fn take_str( &self ) -> Option<String> {
        match self.take() { Some( Value::Str( value )) => Some( value ), _ => None }
    }

    /// Takes the value as a handle; `None` on absence or mismatch.
    pub fn take_handle( &self ) -> Option<Handle> {
        match self.take() { Some( Value::Handle( value )) => Some( value ), _ => None }
    }

    /// Takes the value as a byte payload; `None` on absence or mismatch.
    pub fn take_blob( &self ) -> Option<Vec<u8>> {
        match self.take() { Some( Value::Blob( value )) => Some( value ), _ => None }
    }

}
