//! Event identities and payload shapes.
//!
//! A host-to-plugin event is a `( code, payload )` pair created by the host
//! for the duration of one dispatch call, consumed synchronously and never
//! retained. The code is a small positive integer partitioned by numeric
//! range; the payload is either a key/value [`ArgList`] or a fixed positional
//! slot sequence.

use thiserror::Error ;

use crate::args::ArgList ;
use crate::value::{ Handle, OutSlot, Value };



/// Integer identity of a host-to-plugin event.
///
/// Codes are grouped by numeric range. New codes are added at the high end of
/// a group; consumers must ignore codes they do not recognise, so an older
/// plugin keeps working against a newer host.
#[derive( Copy, Clone, Debug, Eq, Hash, PartialEq )]
pub struct EventCode( u32 );

impl EventCode {

    // Lifecycle
    pub const INITIALIZE: EventCode = EventCode( 0x001 );
    pub const SHUTDOWN: EventCode = EventCode( 0x002 );

    // Sub-command enumeration
    pub const ENUM_SUBCOMMAND: EventCode = EventCode( 0x020 );
    pub const SUBCOMMAND_TITLE: EventCode = EventCode( 0x021 );

    // Visibility
    pub const ACTIVATE: EventCode = EventCode( 0x100 );
    pub const QUERY_ACTIVATED: EventCode = EventCode( 0x101 );
    pub const MINIMIZE: EventCode = EventCode( 0x102 );

    // Pointer and keyboard input
    pub const LEFT_BUTTON_DOWN: EventCode = EventCode( 0x120 );
    pub const LEFT_BUTTON_UP: EventCode = EventCode( 0x121 );
    pub const MIDDLE_BUTTON_DOWN: EventCode = EventCode( 0x122 );
    pub const MIDDLE_BUTTON_UP: EventCode = EventCode( 0x123 );
    pub const RIGHT_BUTTON_DOWN: EventCode = EventCode( 0x124 );
    pub const RIGHT_BUTTON_UP: EventCode = EventCode( 0x125 );
    pub const MOUSE_MOVE: EventCode = EventCode( 0x126 );
    pub const MOUSE_WHEEL: EventCode = EventCode( 0x127 );
    pub const KEY_DOWN: EventCode = EventCode( 0x128 );

    // Document lifecycle
    pub const NEW_DOCUMENT: EventCode = EventCode( 0x200 );
    pub const INSERT_DOCUMENT: EventCode = EventCode( 0x201 );
    pub const END_DOCUMENT: EventCode = EventCode( 0x202 );
    pub const SAVE_DOCUMENT: EventCode = EventCode( 0x203 );
    pub const SAVE_PAST_DOCUMENT: EventCode = EventCode( 0x204 );

    // Undo / redo
    pub const UNDO: EventCode = EventCode( 0x210 );
    pub const REDO: EventCode = EventCode( 0x211 );
    pub const UNDO_UPDATED: EventCode = EventCode( 0x212 );

    // Notification-only
    pub const OBJECT_MODIFIED: EventCode = EventCode( 0x220 );
    pub const OBJECT_SELECTED: EventCode = EventCode( 0x221 );
    pub const MATERIAL_MODIFIED: EventCode = EventCode( 0x222 );
    pub const OBJECT_LIST_UPDATED: EventCode = EventCode( 0x223 );
    pub const MATERIAL_LIST_UPDATED: EventCode = EventCode( 0x224 );
    pub const SCENE_UPDATED: EventCode = EventCode( 0x225 );
    pub const EDIT_OPTION_CHANGED: EventCode = EventCode( 0x226 );

    // User message relay
    pub const USER_MESSAGE: EventCode = EventCode( 0x300 );

    // Variable-length payloads
    pub const INTERPOLATE: EventCode = EventCode( 0x400 );
    pub const CLIPBOARD: EventCode = EventCode( 0x410 );

    // Import-only
    pub const IMPORT_BACKGROUND_QUERY: EventCode = EventCode( 0x500 );
    pub const IMPORT_SET_OPTIONS: EventCode = EventCode( 0x501 );

    /// Creates an event code from its raw integer identity.
    pub const fn new( raw: u32 ) -> Self { Self( raw )}

    /// Raw integer identity.
    #[inline] pub const fn raw( &self ) -> u32 { self.0 }

}

impl std::fmt::Display for EventCode {
    fn fmt( &self, f: &mut std::fmt::Formatter ) -> Result<(), std::fmt::Error> {
        write!( f, "event 0x{:03x}", self.0 )
    }
}

/// Payload delivered with one event.
///
/// Most events carry the key/value shape. The interpolation payload and one
/// legacy visibility event instead use fixed positional layout, where slot
/// order is itself the protocol.
#[derive( Copy, Clone, Debug )]
pub enum Payload<'call> {
    /// No payload.
    None,
    /// Key/value argument list.
    Args( &'call ArgList ),
    /// Fixed positional slot sequence.
    Seq( &'call [Value] ),
}

impl<'call> Payload<'call> {

    /// Key lookup over the key/value shape. The empty and positional shapes
    /// find nothing, matching the null-array tolerance of the codec.
    pub fn lookup( self, key: &str ) -> Option<&'call Value> {
        match self {
            Self::Args( args ) => args.lookup( key ),
            Self::None | Self::Seq( _ ) => None,
        }
    }

    /// Looks up `key` as a boolean, degrading to `default`.
    pub fn lookup_bool( self, key: &str, default: bool ) -> bool {
        self.lookup( key ).and_then( Value::as_bool ).unwrap_or( default )
    }

    /// Looks up `key` as an integer, degrading to `default`.
    pub fn lookup_int( self, key: &str, default: i32 ) -> i32 {
        self.lookup( key ).and_then( Value::as_int ).unwrap_or( default )
    }

    /// Looks up `key` as a float, degrading to `default`.
    pub fn lookup_float( self, key: &str, default: f32 ) -> f32 {
        self.lookup( key ).and_then( Value::as_float ).unwrap_or( default )
    }

    /// Looks up `key` as a string.
    pub fn lookup_str( self, key: &str ) -> Option<&'call str> {
        self.lookup( key ).and_then( Value::as_str )
    }

    /// Looks up `key` as a handle.
    pub fn lookup_handle( self, key: &str ) -> Option<Handle> {
        self.lookup( key ).and_then( Value::as_handle )
    }

    /// Looks up `key` as a flat integer table.
    pub fn lookup_ints( self, key: &str ) -> Option<&'call [i32]> {
        self.lookup( key ).and_then( Value::as_ints )
    }

    /// Looks up `key` as a byte payload.
    pub fn lookup_blob( self, key: &str ) -> Option<&'call [u8]> {
        self.lookup( key ).and_then( Value::as_blob )
    }

    /// Returns the output slot stored under `key`.
    pub fn out_slot( self, key: &str ) -> Option<OutSlot> {
        self.lookup( key ).and_then( Value::as_out ).cloned()
    }

    /// First entry of the key/value shape, in wire order.
    pub fn first( self ) -> Option<( &'call str, &'call Value )> {
        match self {
            Self::Args( args ) => args.first(),
            Self::None | Self::Seq( _ ) => None,
        }
    }

    /// The positional shape.
    ///
    /// # Errors
    /// Fails when the event carried the key/value shape or nothing.
    pub fn seq( self ) -> Result<&'call [Value], PayloadError> {
        match self {
            Self::Seq( words ) => Ok( words ),
            Self::None | Self::Args( _ ) => Err( PayloadError::WrongShape ),
        }
    }

}

/// Bit assignments of the `button_state` bitmask.
pub mod button_state {
    pub const LEFT: i32 = 0x01;
    pub const RIGHT: i32 = 0x02;
    pub const SHIFT: i32 = 0x04;
    pub const CTRL: i32 = 0x08;
    pub const MIDDLE: i32 = 0x10;
    pub const ALT: i32 = 0x20;
}

/// Composite pointer/keyboard state decoded from an input event payload.
///
/// The `button_state` bitmask expands into the individual button and
/// modifier fields; see [`button_state`] for the bit assignments.
#[derive( Clone, Debug, Default, PartialEq )]
pub struct InputState {
    pub x: i32,
    pub y: i32,
    pub wheel: i32,
    pub pressure: f32,
    pub left: bool,
    pub middle: bool,
    pub right: bool,
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl InputState {

    /// Decodes the composite record from an input event payload.
    ///
    /// Every field is optional on the wire; missing keys decode to the
    /// neutral value.
    pub fn decode( payload: Payload ) -> Self {
        let mask = payload.lookup_int( "button_state", 0 );
        Self {
            x: payload.lookup_int( "mouse_pos_x", 0 ),
            y: payload.lookup_int( "mouse_pos_y", 0 ),
            wheel: payload.lookup_int( "wheel", 0 ),
            pressure: payload.lookup_float( "pressure", 0.0 ),
            left: mask & button_state::LEFT != 0,
            middle: mask & button_state::MIDDLE != 0,
            right: mask & button_state::RIGHT != 0,
            shift: mask & button_state::SHIFT != 0,
            ctrl: mask & button_state::CTRL != 0,
            alt: mask & button_state::ALT != 0,
        }
    }

}

/// Checked decode failure for a malformed payload.
///
/// The source design treats a malformed payload as a caller contract
/// violation and does not detect it; here it surfaces as a recoverable error
/// and the event is simply not performed. Nothing in this taxonomy is fatal.
#[derive( Error, Debug, PartialEq )]
pub enum PayloadError {
    /// The payload shape does not match the event (key/value vs positional).
    #[error( "Wrong Payload Shape" )] WrongShape,
    /// A required field is missing from the payload.
    #[error( "Missing Field: '{0}'" )] MissingField( &'static str ),
    /// A positional slot is absent or holds the wrong convention.
    #[error( "Bad Slot: {0}" )] BadSlot( usize ),
    /// A count-prefixed table ends before its declared count.
    #[error( "Short Table: declared {declared}, found {found}" )]
    ShortTable { declared: usize, found: usize },
    /// The leading tag of a tagged payload is not a known sub-kind.
    #[error( "Unknown Tag: '{0}'" )] UnknownTag( String ),
}
