//! A typed boundary layer for scene-editor plugin modules.
//!
//! Plugins and their host are compiled independently and may not share a
//! stable binary struct layout, so every crossing is encoded as a
//! self-describing sequence of key/value pairs instead of a fixed struct.
//! `scene_link` is both halves of that boundary: it decodes host events into
//! calls on the **role interfaces** a plugin implements, and it builds the
//! plugin's outbound requests back toward the host.
//!
//! # Core Concepts
//!
//! - [`ArgList`]: The self-describing key/value argument sequence used for
//! 	every boundary crossing, in both directions. On the wire it is
//! 	null-terminated; here the terminator is implicit in the type.
//!
//! - [`Value`]: A single typed slot. The wire carries untyped words read by
//! 	key-name convention; the convention is applied exactly once at decode
//! 	and the result stays statically typed from then on.
//!
//! - [`PluginModule`]: The capability set of one plugin instance: a "try as
//! 	role" query per role ([`StationHandler`], [`CommandHandler`],
//! 	[`ImportHandler`], [`ExportHandler`], [`CreateHandler`],
//! 	[`ObjectHandler`], [`SelectHandler`]). A role that is not implemented
//! 	simply resolves to `None`; Station and Command may both be present.
//!
//! - [`Dispatcher`]: Consumes `( event code, payload )` pairs from the host,
//! 	decodes the payload, resolves the role the event needs and invokes the
//! 	matching role method. Unknown codes and missing roles are
//! 	[`Outcome::NotHandled`], never errors; the host tolerates plugins that
//! 	do not understand newer codes.
//!
//! - [`HostCall`]: The outbound counterpart. Builds an argument list, sends
//! 	it through the [`HostBridge`] entry point and reads results out of
//! 	[`OutSlot`]s.
//!
//! # Example
//!
//! ```
//! use scene_link::{
//! 	ArgList, Dispatcher, EventCode, Handle, Outcome, Payload,
//! 	PluginModule, StationHandler, CommandHandler, InputState,
//! };
//!
//! // A plugin declares the roles it implements; everything else stays at
//! // the trait defaults.
//! #[derive( Default )]
//! struct Sketcher {
//! 	active: bool,
//! 	strokes: u32,
//! }
//!
//! impl StationHandler for Sketcher {
//! 	fn on_activate( &mut self, flag: bool ) -> bool {
//! 		self.active = flag ;
//! 		self.active
//! 	}
//! 	fn is_activated( &mut self ) -> bool { self.active }
//! }
//!
//! impl CommandHandler for Sketcher {
//! 	fn on_left_button_down( &mut self, _scene: Handle, input: &InputState ) -> bool {
//! 		self.strokes += 1 ;
//! 		input.left
//! 	}
//! }
//!
//! // The capability set is fixed at construction: this instance answers to
//! // both Station and Command, and to nothing else.
//! impl PluginModule for Sketcher {
//! 	fn as_station( &mut self ) -> Option<&mut dyn StationHandler> { Some( self )}
//! 	fn as_command( &mut self ) -> Option<&mut dyn CommandHandler> { Some( self )}
//! }
//!
//! # fn main() -> Result<(), scene_link::PayloadError> {
//! // The dispatcher owns the instance; the host delivers events through it.
//! let mut dispatcher = Dispatcher::new( Sketcher::default() );
//!
//! let payload = ArgList::new().arg( "flag", true );
//! let outcome = dispatcher.dispatch( EventCode::ACTIVATE, Payload::Args( &payload ))?;
//! assert_eq!( outcome, Outcome::Handled );
//!
//! let payload = ArgList::new()
//! 	.arg( "scene", Handle::new( 7 ))
//! 	.arg( "mouse_pos_x", 10 )
//! 	.arg( "mouse_pos_y", 20 )
//! 	.arg( "button_state", 0x05 )
//! 	.arg( "pressure", 0.0f32 );
//! let outcome = dispatcher.dispatch( EventCode::LEFT_BUTTON_DOWN, Payload::Args( &payload ))?;
//! assert_eq!( outcome, Outcome::Handled );
//! assert_eq!( dispatcher.module().strokes, 1 );
//!
//! // Codes this plugin does not understand are ignored, not failed.
//! let outcome = dispatcher.dispatch( EventCode::new( 0x9999 ), Payload::None )?;
//! assert_eq!( outcome, Outcome::NotHandled );
//! # Ok(())
//! # }
//! ```
//!
//! # Outbound Calls
//!
//! A handler may call back into the host while an event is being dispatched.
//! Each call owns its own argument list, so the nesting is safe.
//!
//! ```
//! use scene_link::{ ArgList, Handle, HostBridge, HostCall, MessageKind };
//!
//! // The real entry point lives on the host side; tests and examples mock it.
//! struct Host ;
//! impl HostBridge for Host {
//! 	fn send( &mut self, kind: MessageKind, args: &ArgList ) -> bool {
//! 		match kind {
//! 			MessageKind::CREATE_OBJECT => {
//! 				let slot = args.out_slot( "result" ).expect( "output slot" );
//! 				slot.set( Handle::new( 42 ));
//! 				true
//! 			}
//! 			_ => false,
//! 		}
//! 	}
//! }
//!
//! let mut call = HostCall::new( MessageKind::CREATE_OBJECT )
//! 	.arg( "document", Handle::new( 1 ))
//! 	.arg( "name", "cube" );
//! let result = call.out( "result" );
//!
//! assert!( call.send( &mut Host ));
//! assert_eq!( result.take_handle(), Some( Handle::new( 42 )));
//! ```

mod args ;
mod clipboard ;
mod dispatch ;
mod document ;
mod event ;
mod host ;
mod interpolate ;
mod role ;
mod value ;

pub use args::ArgList ;
pub use clipboard::{ ClipboardError, ClipboardEvent, CopyBuffer, SelectionCounts };
pub use dispatch::{ Dispatcher, Outcome };
pub use document::IdTable ;
pub use event::{ button_state, EventCode, InputState, Payload, PayloadError };
pub use host::{ create_object, delete_object, undo_state };
pub use host::{ HostBridge, HostCall, MessageKind, XmlTree };
pub use interpolate::{ ApexWeight, InterpolateEvent, VertexWeight };
pub use role::{ PluginModule, Role };
pub use role::{
	CommandHandler, CreateHandler, ExportHandler, ImportHandler,
	ObjectHandler, SelectHandler, StationHandler,
};
pub use value::{ Handle, OutSlot, Value };
