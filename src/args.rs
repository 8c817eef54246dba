//! The argument-list codec.
//!
//! Every boundary crossing is encoded as an ordered sequence of
//! `( key, value )` entries. On the wire the sequence is terminated by a null
//! key; an [`ArgList`] owns its entries, so the terminator is implicit in the
//! type and a list without one is unrepresentable.

use crate::value::{ Handle, OutSlot, Value };



/// Self-describing key/value argument sequence used at the boundary.
///
/// Keys are case-sensitive ASCII, conventionally `lower_snake`
/// (`mouse_pos_x`, `src_product`). Lookup is a linear scan with byte-exact
/// key comparison; the first match wins. Lookup-style lists never repeat a
/// key; the encoder side is responsible for that, the decoder does not
/// enforce it.
///
/// An empty list stands in for the source protocol's null array: every
/// lookup simply finds nothing.
///
/// Lifetime rule: the list and everything its slots reference are owned by
/// the single call that carries them. Nothing is retained across calls
/// unless the receiving side documents a hand-off (returned handles,
/// clipboard buffers).
#[derive( Clone, Debug, Default, PartialEq )]
pub struct ArgList {
    entries: Vec<( String, Value )>,
}

impl ArgList {

    /// Creates an empty argument list.
    pub fn new() -> Self { Self::default() }

    /// Appends an entry, builder style.
    pub fn arg( mut self, key: impl Into<String>, value: impl Into<Value> ) -> Self {
        self.entries.push(( key.into(), value.into() ));
        self
    }

    /// Appends a fresh output slot under `key` and returns a second handle to
    /// it for reading after the call.
    pub fn out( &mut self, key: impl Into<String> ) -> OutSlot {
        let slot = OutSlot::new();
        self.entries.push(( key.into(), Value::Out( slot.clone() )));
        slot
    }

    /// Entry count, sentinel excluded.
    #[inline] pub fn len( &self ) -> usize { self.entries.len() }

    /// `true` for the empty (null-array) case.
    #[inline] pub fn is_empty( &self ) -> bool { self.entries.is_empty() }

    /// Iterates entries in wire order.
    pub fn iter( &self ) -> impl Iterator<Item = ( &str, &Value )> {
        self.entries.iter().map(|( key, value )| ( key.as_str(), value ))
    }

    /// First entry in wire order, if any.
    ///
    /// The clipboard sub-protocol branches on the first entry's key rather
    /// than on a lookup.
    pub fn first( &self ) -> Option<( &str, &Value )> {
        self.entries.first().map(|( key, value )| ( key.as_str(), value ))
    }

    /// Linear scan for `key`; returns the slot following the first matching
    /// key, or `None` once the end of the list is reached.
    pub fn lookup( &self, key: &str ) -> Option<&Value> {
        self.entries.iter()
            .find(|( entry_key, _ )| entry_key.as_str() == key )
            .map(|( _, value )| value )
    }

    /// Looks up `key` as a boolean. Absence and convention mismatch both
    /// degrade to `default`; this never fails.
    pub fn lookup_bool( &self, key: &str, default: bool ) -> bool {
        self.lookup( key ).and_then( Value::as_bool ).unwrap_or( default )
    }

    /// Looks up `key` as an integer. Absence and convention mismatch both
    /// degrade to `default`; this never fails.
    pub fn lookup_int( &self, key: &str, default: i32 ) -> i32 {
        self.lookup( key ).and_then( Value::as_int ).unwrap_or( default )
    }

    /// Looks up `key` as a float. Absence and convention mismatch both
    /// degrade to `default`; this never fails.
    pub fn lookup_float( &self, key: &str, default: f32 ) -> f32 {
        self.lookup( key ).and_then( Value::as_float ).unwrap_or( default )
    }

    /// Looks up `key` as a string.
    pub fn lookup_str( &self, key: &str ) -> Option<&str> {
        self.lookup( key ).and_then( Value::as_str )
    }

    /// Looks up `key` as a handle.
    pub fn lookup_handle( &self, key: &str ) -> Option<Handle> {
        self.lookup( key ).and_then( Value::as_handle )
    }

    /// Looks up `key` as a flat integer table.
    pub fn lookup_ints( &self, key: &str ) -> Option<&[i32]> {
        self.lookup( key ).and_then( Value::as_ints )
    }

    /// Looks up `key` as a byte payload.
    pub fn lookup_blob( &self, key: &str ) -> Option<&[u8]> {
        self.lookup( key ).and_then( Value::as_blob )
    }

    /// Returns the output slot stored under `key`.
    pub fn out_slot( &self, key: &str ) -> Option<OutSlot> {
        self.lookup( key ).and_then( Value::as_out ).cloned()
    }

}

impl FromIterator<( String, Value )> for ArgList {
    fn from_iter<I: IntoIterator<Item = ( String, Value )>>( entries: I ) -> Self {
        Self { entries: entries.into_iter().collect() }
    }
}
