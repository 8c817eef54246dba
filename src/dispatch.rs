//! Event decoding and dispatch.

use log::{ debug, trace, warn };

use crate::clipboard::{ ClipboardEvent, CopyBuffer };
use crate::document::IdTable ;
use crate::event::{ EventCode, InputState, Payload, PayloadError };
use crate::interpolate::InterpolateEvent ;
use crate::role::{ CommandHandler, PluginModule, StationHandler };
use crate::value::{ Handle, Value };



/// Result of delivering one event to a plugin instance.
#[derive( Copy, Clone, Debug, Eq, PartialEq )]
pub enum Outcome {
	/// The event was decoded, the role method ran, and boolean handlers
	/// reported success.
	Handled,
	/// The code is unknown, the required role is absent, or a boolean
	/// handler declined. Never an error: the host must tolerate plugins
	/// that do not understand newer codes.
	NotHandled,
}

impl Outcome {

	fn from_bool( handled: bool ) -> Self {
		match handled {
			true => Self::Handled,
			false => Self::NotHandled,
		}
	}

	/// `true` when the event was handled.
	#[inline] pub fn handled( &self ) -> bool { matches!( self, Self::Handled )}

}

/// Synchronous event decoder and dispatcher for one plugin instance.
///
/// The dispatcher owns its module (there is no ambient singleton) and
/// handles one event to completion before the next is accepted; events are
/// never queued, reordered or retained. A handler may issue outbound
/// [`HostCall`]s before returning: each call's argument list is independent
/// and stack-scoped, so the nesting is safe.
///
/// [`HostCall`]: crate::HostCall
pub struct Dispatcher<M: PluginModule> {
	module: M,
}

impl<M: PluginModule> Dispatcher<M> {

	/// Wraps a plugin instance for event delivery.
	pub fn new( module: M ) -> Self { Self { module }}

	/// The wrapped instance.
	pub fn module( &mut self ) -> &mut M { &mut self.module }

	/// Releases the wrapped instance.
	pub fn into_module( self ) -> M { self.module }

	/// Delivers one event.
	///
	/// # Errors
	/// Fails only on a malformed payload, in which case the event was not
	/// performed. Unknown codes and missing roles report through
	/// [`Outcome::NotHandled`], not as errors.
	pub fn dispatch( &mut self, code: EventCode, payload: Payload ) -> Result<Outcome, PayloadError> {
		trace!( "dispatching {}", code );
		let outcome = self.route( code, payload );
		match &outcome {
			Ok( Outcome::NotHandled ) => debug!( "{} not handled", code ),
			Err( error ) => warn!( "{} payload rejected: {}", code, error ),
			Ok( Outcome::Handled ) => {}
		}
		outcome
	}

	fn route( &mut self, code: EventCode, payload: Payload ) -> Result<Outcome, PayloadError> {
		match code {

			EventCode::INITIALIZE => self.station_bool(| station | station.initialize() ),
			EventCode::SHUTDOWN => self.station_bool(| station | station.shutdown() ),

			EventCode::ENUM_SUBCOMMAND =>
				self.subcommand( payload, | station, index | station.subcommand( index )),
			EventCode::SUBCOMMAND_TITLE =>
				self.subcommand( payload, | station, index | station.subcommand_title( index )),

			EventCode::ACTIVATE => {
				let flag = payload.lookup_bool( "flag", false );
				self.station_bool(| station | station.on_activate( flag ))
			}
			EventCode::QUERY_ACTIVATED => self.station_bool(| station | station.is_activated() ),
			EventCode::MINIMIZE => {
				// Legacy event: the flag is the single positional slot, not keyed.
				let flag = match payload.seq()?.first() {
					Some( Value::Bool( flag )) => *flag,
					_ => return Err( PayloadError::BadSlot( 0 )),
				};
				self.station_bool(| station | station.on_minimize( flag ))
			}

			EventCode::LEFT_BUTTON_DOWN =>
				self.input( payload, | command, scene, input | command.on_left_button_down( scene, input )),
			EventCode::LEFT_BUTTON_UP =>
				self.input( payload, | command, scene, input | command.on_left_button_up( scene, input )),
			EventCode::MIDDLE_BUTTON_DOWN =>
				self.input( payload, | command, scene, input | command.on_middle_button_down( scene, input )),
			EventCode::MIDDLE_BUTTON_UP =>
				self.input( payload, | command, scene, input | command.on_middle_button_up( scene, input )),
			EventCode::RIGHT_BUTTON_DOWN =>
				self.input( payload, | command, scene, input | command.on_right_button_down( scene, input )),
			EventCode::RIGHT_BUTTON_UP =>
				self.input( payload, | command, scene, input | command.on_right_button_up( scene, input )),
			EventCode::MOUSE_MOVE =>
				self.input( payload, | command, scene, input | command.on_mouse_move( scene, input )),
			EventCode::MOUSE_WHEEL =>
				self.input( payload, | command, scene, input | command.on_mouse_wheel( scene, input )),
			EventCode::KEY_DOWN =>
				self.input( payload, | command, scene, input | command.on_key_down( scene, input )),

			EventCode::NEW_DOCUMENT => {
				let filename = payload.lookup_str( "filename" );
				let settings = payload.lookup_handle( "xml_elem" ).unwrap_or( Handle::NULL );
				self.station_void(| station | station.on_new_document( filename, settings ))
			}
			EventCode::INSERT_DOCUMENT => {
				let filename = payload.lookup_str( "filename" )
					.ok_or( PayloadError::MissingField( "filename" ))?;
				let objects = IdTable::decode( payload.lookup_ints( "object_table" ).unwrap_or( &[] ))?;
				let materials = IdTable::decode( payload.lookup_ints( "material_table" ).unwrap_or( &[] ))?;
				self.station_void(| station | station.on_insert_document( filename, &objects, &materials ))
			}
			EventCode::END_DOCUMENT => self.station_void(| station | station.on_end_document() ),
			EventCode::SAVE_DOCUMENT => self.save( payload, false ),
			EventCode::SAVE_PAST_DOCUMENT => self.save( payload, true ),

			EventCode::UNDO => {
				let state = payload.lookup_int( "state", 0 );
				self.station_bool(| station | station.on_undo( state ))
			}
			EventCode::REDO => {
				let state = payload.lookup_int( "state", 0 );
				self.station_bool(| station | station.on_redo( state ))
			}
			EventCode::UNDO_UPDATED => {
				let state = payload.lookup_int( "state", 0 );
				let size = payload.lookup_int( "size", 0 );
				self.station_void(| station | station.on_undo_updated( state, size ))
			}

			EventCode::OBJECT_MODIFIED => self.station_void(| station | station.on_object_modified() ),
			EventCode::OBJECT_SELECTED => self.station_void(| station | station.on_object_selected() ),
			EventCode::MATERIAL_MODIFIED => self.station_void(| station | station.on_material_modified() ),
			EventCode::OBJECT_LIST_UPDATED => self.station_void(| station | station.on_object_list_updated() ),
			EventCode::MATERIAL_LIST_UPDATED => self.station_void(| station | station.on_material_list_updated() ),
			EventCode::SCENE_UPDATED => {
				let scene = payload.lookup_handle( "scene" ).unwrap_or( Handle::NULL );
				self.station_void(| station | station.on_scene_updated( scene ))
			}
			EventCode::EDIT_OPTION_CHANGED => self.station_void(| station | station.on_edit_option_changed() ),

			EventCode::USER_MESSAGE => self.user_message( payload ),

			EventCode::INTERPOLATE => {
				let event = InterpolateEvent::decode( payload )?;
				self.station_bool(| station | match &event {
					InterpolateEvent::Vertex { target, vertex, weights } =>
						station.interpolate_vertex( *target, *vertex, weights ),
					InterpolateEvent::Apex { target, face, apex, weights } =>
						station.interpolate_apex( *target, *face, *apex, weights ),
				})
			}

			EventCode::CLIPBOARD => self.clipboard( payload ),

			EventCode::IMPORT_BACKGROUND_QUERY => Ok( match self.module.as_import() {
				None => Outcome::NotHandled,
				Some( import ) => Outcome::from_bool( import.supports_background() ),
			}),
			EventCode::IMPORT_SET_OPTIONS => Ok( match self.module.as_import() {
				None => Outcome::NotHandled,
				Some( import ) => {
					let background = payload.lookup_bool( "background", false );
					let options = payload.lookup( "args" ).cloned();
					import.set_options( background, options );
					Outcome::Handled
				}
			}),

			// Forward compatibility: unknown codes are ignored, not errors.
			_ => Ok( Outcome::NotHandled ),

		}
	}

	fn station_bool(
		&mut self,
		call: impl FnOnce( &mut dyn StationHandler ) -> bool,
	) -> Result<Outcome, PayloadError> {
		Ok( match self.module.as_station() {
			None => Outcome::NotHandled,
			Some( station ) => Outcome::from_bool( call( station )),
		})
	}

	fn station_void(
		&mut self,
		call: impl FnOnce( &mut dyn StationHandler ),
	) -> Result<Outcome, PayloadError> {
		Ok( match self.module.as_station() {
			None => Outcome::NotHandled,
			Some( station ) => {
				call( station );
				Outcome::Handled
			}
		})
	}

	fn input(
		&mut self,
		payload: Payload,
		call: impl FnOnce( &mut dyn CommandHandler, Handle, &InputState ) -> bool,
	) -> Result<Outcome, PayloadError> {
		Ok( match self.module.as_command() {
			None => Outcome::NotHandled,
			Some( command ) => {
				let scene = payload.lookup_handle( "scene" ).unwrap_or( Handle::NULL );
				let input = InputState::decode( payload );
				Outcome::from_bool( call( command, scene, &input ))
			}
		})
	}

	fn subcommand(
		&mut self,
		payload: Payload,
		call: impl FnOnce( &mut dyn StationHandler, i32 ) -> Option<String>,
	) -> Result<Outcome, PayloadError> {
		Ok( match self.module.as_station() {
			None => Outcome::NotHandled,
			Some( station ) => {
				let index = payload.lookup_int( "index", 0 );
				if let Some( name ) = call( station, index ) {
					if let Some( slot ) = payload.out_slot( "result" ) {
						slot.set( name );
					}
				}
				Outcome::Handled
			}
		})
	}

	fn save( &mut self, payload: Payload, past: bool ) -> Result<Outcome, PayloadError> {
		let filename = payload.lookup_str( "filename" )
			.ok_or( PayloadError::MissingField( "filename" ))?;
		let settings = payload.lookup_handle( "xml_elem" ).unwrap_or( Handle::NULL );
		Ok( match self.module.as_station() {
			None => Outcome::NotHandled,
			Some( station ) => {
				let save_uid = match past {
					true => station.on_save_past_document( filename, settings ),
					false => station.on_save_document( filename, settings ),
				};
				if let Some( slot ) = payload.out_slot( "save_uid" ) {
					slot.set( save_uid );
				}
				Outcome::Handled
			}
		})
	}

	fn user_message( &mut self, payload: Payload ) -> Result<Outcome, PayloadError> {
		Ok( match self.module.as_station() {
			None => Outcome::NotHandled,
			Some( station ) => {
				let result = station.on_user_message(
					payload.lookup_int( "src_product", 0 ),
					payload.lookup_int( "src_id", 0 ),
					payload.lookup_str( "description" ).unwrap_or( "" ),
					payload.lookup_blob( "message" ).unwrap_or( &[] ),
				);
				if let Some( slot ) = payload.out_slot( "result" ) {
					slot.set( result );
				}
				Outcome::Handled
			}
		})
	}

	fn clipboard( &mut self, payload: Payload ) -> Result<Outcome, PayloadError> {
		let event = ClipboardEvent::decode( payload )?;
		let Some( station ) = self.module.as_station() else {
			return Ok( Outcome::NotHandled );
		};
		Ok( match event {
			ClipboardEvent::Query { selection, result } => {
				result.set( station.clipboard_query( &selection ));
				Outcome::Handled
			}
			ClipboardEvent::Copy { cut, object, objects, materials, data, size } => {
				let mut buffer = CopyBuffer::new();
				let produced = station.clipboard_copy( cut, object, &objects, &materials, &mut buffer );
				match ( produced, buffer.into_data() ) {
					( true, Some( bytes )) => {
						size.set( bytes.len() as i32 );
						data.set( Value::Blob( bytes ));
						Outcome::Handled
					}
					_ => Outcome::NotHandled,
				}
			}
			ClipboardEvent::Paste { object, data } => {
				station.clipboard_paste( object, &data );
				Outcome::Handled
			}
		})
	}

}
