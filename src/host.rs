//! Outbound calls toward the host.
//!
//! The symmetric counterpart of event dispatch: the plugin builds an
//! argument list, names a request kind and sends it through the host's
//! single call-in entry point, then reads results out of designated output
//! slots. The host-side collaborators consumed here, the entry point itself
//! and the settings tree, are external and only their interfaces are
//! defined.

use crate::args::ArgList ;
use crate::value::{ Handle, OutSlot, Value };



/// Integer identity of a plugin-to-host request.
#[derive( Copy, Clone, Debug, Eq, Hash, PartialEq )]
pub struct MessageKind( u32 );

impl MessageKind {

    pub const CREATE_OBJECT: MessageKind = MessageKind( 0x010 );
    pub const DELETE_OBJECT: MessageKind = MessageKind( 0x011 );
    pub const UNDO_STATE: MessageKind = MessageKind( 0x020 );
    pub const REDO_STATE: MessageKind = MessageKind( 0x021 );
    pub const UPDATE_UNDO: MessageKind = MessageKind( 0x022 );
    pub const GET_EDIT_OPTION: MessageKind = MessageKind( 0x030 );

    /// Creates a message kind from its raw integer identity.
    pub const fn new( raw: u32 ) -> Self { Self( raw )}

    /// Raw integer identity.
    #[inline] pub const fn raw( &self ) -> u32 { self.0 }

}

impl std::fmt::Display for MessageKind {
    fn fmt( &self, f: &mut std::fmt::Formatter ) -> Result<(), std::fmt::Error> {
        write!( f, "message 0x{:03x}", self.0 )
    }
}

/// The host's call-in entry point.
///
/// The argument list and everything its slots reference stay valid for the
/// duration of the one call only. A host that retains anything must document
/// the hand-off (returned handles, clipboard buffers).
pub trait HostBridge {
    /// Performs one request. Returns `false` when the host rejects or does
    /// not recognise the request kind.
    fn send( &mut self, kind: MessageKind, args: &ArgList ) -> bool ;
}

/// The host's settings tree, reached through [`Handle`]s carried in document
/// events. Interface only; the tree lives on the host side.
pub trait XmlTree {
    /// First child of `element` with the given tag, if present.
    fn first_child( &self, element: Handle, tag: &str ) -> Option<Handle> ;
    /// Appends a child element under `element` and returns its handle.
    fn add_child( &mut self, element: Handle, tag: &str ) -> Handle ;
    /// Text content of `element`.
    fn get_text( &self, element: Handle ) -> Option<String> ;
    /// Replaces the text content of `element`.
    fn set_text( &mut self, element: Handle, text: &str );
    /// Value of the named attribute of `element`, if present.
    fn get_attribute( &self, element: Handle, name: &str ) -> Option<String> ;
    /// Sets the named attribute of `element`.
    fn set_attribute( &mut self, element: Handle, name: &str, value: &str );
}

/// Builder for one outbound request.
///
/// Each call owns its own argument list, so a handler may issue nested
/// outbound calls while an event is being dispatched; the lists are
/// independent and stack-scoped.
#[derive( Debug )]
#[must_use = "call .send() to perform the request"]
pub struct HostCall {
    kind: MessageKind,
    args: ArgList,
}

impl HostCall {

    /// Starts a request of the given kind.
    pub fn new( kind: MessageKind ) -> Self {
        Self { kind, args: ArgList::new() }
    }

    /// Appends an input argument.
    pub fn arg( mut self, key: impl Into<String>, value: impl Into<Value> ) -> Self {
        self.args = self.args.arg( key, value );
        self
    }

    /// Appends an output slot and returns it for reading after [`send`].
    ///
    /// [`send`]: HostCall::send
    pub fn out( &mut self, key: impl Into<String> ) -> OutSlot {
        self.args.out( key )
    }

    /// Sends the request through the host entry point.
    pub fn send( &self, host: &mut impl HostBridge ) -> bool {
        host.send( self.kind, &self.args )
    }

}

/// Asks the host to create a scene object, returning its handle.
pub fn create_object( host: &mut impl HostBridge, document: Handle, name: &str ) -> Option<Handle> {
    let mut call = HostCall::new( MessageKind::CREATE_OBJECT )
        .arg( "document", document )
        .arg( "name", name );
    let result = call.out( "result" );
    match call.send( host ) {
        true => result.take_handle(),
        false => None,
    }
}

/// Asks the host to delete a scene object.
pub fn delete_object( host: &mut impl HostBridge, document: Handle, object: Handle ) -> bool {
    HostCall::new( MessageKind::DELETE_OBJECT )
        .arg( "document", document )
        .arg( "object", object )
        .send( host )
}

/// Reads the host's undo availability state.
pub fn undo_state( host: &mut impl HostBridge, document: Handle ) -> Option<i32> {
    let mut call = HostCall::new( MessageKind::UNDO_STATE ).arg( "document", document );
    let state = call.out( "state" );
    match call.send( host ) {
        true => state.take_int(),
        false => None,
    }
}
