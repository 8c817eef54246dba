//! Clipboard payload decoding.
//!
//! Three messages are multiplexed onto one event code and distinguished by
//! the first tag in the pair list: `query` asks whether a copy is currently
//! possible, `copy`/`cut` produce a buffer whose ownership transfers to the
//! host, and `paste` hands a previously produced buffer back.

use thiserror::Error ;

use crate::document::IdTable ;
use crate::event::{ Payload, PayloadError };
use crate::value::{ Handle, OutSlot };



/// Selected-element counts offered with a clipboard `query`.
#[derive( Copy, Clone, Debug, Default, Eq, PartialEq )]
pub struct SelectionCounts {
	pub vertex: i32,
	pub line: i32,
	pub face: i32,
}

/// Errors raised when a copy handler misuses its result buffer.
#[derive( Error, Debug, Eq, PartialEq )]
pub enum ClipboardError {
	/// The result buffer for this decode was already allocated.
	#[error( "Buffer Already Allocated" )] AlreadyAllocated,
}

/// Single-allocation result buffer handed to a copy/cut handler.
///
/// One decode allows exactly one allocation: a second [`put`] on the same
/// buffer fails and leaves the first result untouched. After the handler
/// returns, ownership of the bytes transfers to the paste-side caller, who
/// is responsible for their eventual release.
///
/// [`put`]: CopyBuffer::put
#[derive( Debug, Default )]
pub struct CopyBuffer {
	data: Option<Vec<u8>>,
}

impl CopyBuffer {

	/// Creates an unallocated buffer.
	pub fn new() -> Self { Self::default() }

	/// Stores the copy result.
	///
	/// # Errors
	/// Fails when a result was already stored for this decode; the stored
	/// result is not modified.
	pub fn put( &mut self, data: Vec<u8> ) -> Result<(), ClipboardError> {
		match self.data.is_some() {
			true => Err( ClipboardError::AlreadyAllocated ),
			false => {
				self.data = Some( data );
				Ok(())
			}
		}
	}

	/// `true` once a result has been stored.
	#[inline] pub fn is_allocated( &self ) -> bool { self.data.is_some() }

	/// Hands the stored bytes off to the caller.
	pub fn into_data( self ) -> Option<Vec<u8>> { self.data }

}

/// A decoded clipboard message.
#[derive( Debug )]
pub enum ClipboardEvent {
	/// Asks whether a copy is currently possible given the selection. The
	/// handler's answer goes back through the `result` slot.
	Query {
		selection: SelectionCounts,
		result: OutSlot,
	},
	/// Copy (or cut) the given object. The handler allocates the result
	/// buffer; buffer and byte count go back through the `data` and `size`
	/// slots.
	Copy {
		cut: bool,
		object: Handle,
		objects: IdTable,
		materials: IdTable,
		data: OutSlot,
		size: OutSlot,
	},
	/// Paste a previously produced buffer into the target object. No return
	/// value.
	Paste {
		object: Handle,
		data: Vec<u8>,
	},
}

impl ClipboardEvent {

	/// Decodes one clipboard message; the first tag picks the branch.
	///
	/// # Errors
	/// Fails on a payload without entries, an unknown leading tag, or a
	/// branch missing one of its required fields.
	pub fn decode( payload: Payload ) -> Result<Self, PayloadError> {
		let ( tag, _ ) = payload.first().ok_or( PayloadError::MissingField( "tag" ))?;
		match tag {
			"query" => Ok( Self::Query {
				selection: SelectionCounts {
					vertex: payload.lookup_int( "select_vertex_count", 0 ),
					line: payload.lookup_int( "select_line_count", 0 ),
					face: payload.lookup_int( "select_face_count", 0 ),
				},
				result: payload.out_slot( "result" ).ok_or( PayloadError::MissingField( "result" ))?,
			}),
			"copy" | "cut" => Ok( Self::Copy {
				cut: tag == "cut",
				object: payload.lookup_handle( "object" ).ok_or( PayloadError::MissingField( "object" ))?,
				objects: IdTable::decode( payload.lookup_ints( "object_table" ).unwrap_or( &[] ))?,
				materials: IdTable::decode( payload.lookup_ints( "material_table" ).unwrap_or( &[] ))?,
				data: payload.out_slot( "data" ).ok_or( PayloadError::MissingField( "data" ))?,
				size: payload.out_slot( "size" ).ok_or( PayloadError::MissingField( "size" ))?,
			}),
			"paste" => Ok( Self::Paste {
				object: payload.lookup_handle( "object" ).ok_or( PayloadError::MissingField( "object" ))?,
				data: payload.lookup_blob( "data" ).map( <[u8]>::to_vec )
					.ok_or( PayloadError::MissingField( "data" ))?,
			}),
			other => Err( PayloadError::UnknownTag( other.to_string() )),
		}
	}

}
