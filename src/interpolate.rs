//! Interpolation payload decoding.
//!
//! The interpolation event arrives as a flat positional sequence: a sub-kind
//! tag, a fixed header, then `n` fixed-size weight records. The records are
//! materialised into an addressable sequence before the handler runs. Small
//! counts stay inline in the container; larger counts spill to the heap. The
//! split is by payload size alone and is correct for any `n`.

use smallvec::SmallVec ;

use crate::event::{ Payload, PayloadError };
use crate::value::{ Handle, Value };



/// Inline record capacity before the container spills to the heap.
const INLINE_RECORDS: usize = 4;

/// One vertex-keyed interpolation source.
#[derive( Copy, Clone, Debug, PartialEq )]
pub struct VertexWeight {
    pub source: Handle,
    pub vertex: i32,
    pub weight: f32,
}

/// One apex-keyed interpolation source.
#[derive( Copy, Clone, Debug, PartialEq )]
pub struct ApexWeight {
    pub source: Handle,
    pub face: i32,
    pub apex: i32,
    pub weight: f32,
}

/// A decoded interpolation request.
#[derive( Clone, Debug, PartialEq )]
pub enum InterpolateEvent {
    /// Weight table for one vertex of the target object.
    ///
    /// Wire layout: `[ "vertex", target, vertex, n, ( source, vertex, weight ) * n ]`.
    Vertex {
        target: Handle,
        vertex: i32,
        weights: SmallVec<[VertexWeight; INLINE_RECORDS]>,
    },
    /// Weight table for one apex of one face of the target object.
    ///
    /// Wire layout: `[ "apex", target, face, apex, n, ( source, face, apex, weight ) * n ]`.
    Apex {
        target: Handle,
        face: i32,
        apex: i32,
        weights: SmallVec<[ApexWeight; INLINE_RECORDS]>,
    },
}

impl InterpolateEvent {

    /// Decodes the flat positional payload.
    ///
    /// Word 0 carries the sub-kind tag; the header and per-record layout
    /// depend on it. The declared record count is checked against the slots
    /// actually present.
    ///
    /// # Errors
    /// Fails on a non-positional payload, an unknown tag, a missing or
    /// wrong-convention slot, or a record count the payload cannot satisfy.
    pub fn decode( payload: Payload ) -> Result<Self, PayloadError> {
        let words = payload.seq()?;
        match words.first() {
            Some( Value::Str( tag )) if tag == "vertex" => Self::decode_vertex( words ),
            Some( Value::Str( tag )) if tag == "apex" => Self::decode_apex( words ),
            Some( Value::Str( tag )) => Err( PayloadError::UnknownTag( tag.clone() )),
            _ => Err( PayloadError::BadSlot( 0 )),
        }
    }

    fn decode_vertex( words: &[Value] ) -> Result<Self, PayloadError> {
        let target = word_handle( words, 1 )?;
        let vertex = word_int( words, 2 )?;
        let count = word_count( words, 3 )?;
        let mut weights = SmallVec::new();
        for record in 0..count {
            let base = 4 + record * 3;
            weights.push( VertexWeight {
                source: word_handle( words, base )?,
                vertex: word_int( words, base + 1 )?,
                weight: word_float( words, base + 2 )?,
            });
        }
        Ok( Self::Vertex { target, vertex, weights })
    }

    fn decode_apex( words: &[Value] ) -> Result<Self, PayloadError> {
        let target = word_handle( words, 1 )?;
        let face = word_int( words, 2 )?;
        let apex = word_int( words, 3 )?;
        let count = word_count( words, 4 )?;
        let mut weights = SmallVec::new();
        for record in 0..count {
            let base = 5 + record * 4;
            weights.push( ApexWeight {
                source: word_handle( words, base )?,
                face: word_int( words, base + 1 )?,
                apex: word_int( words, base + 2 )?,
                weight: word_float( words, base + 3 )?,
            });
        }
        Ok( Self::Apex { target, face, apex, weights })
    }

    /// Number of decoded weight records.
    pub fn len( &self ) -> usize {
        match self {
            Self::Vertex { weights, .. } => weights.len(),
            Self::Apex { weights, .. } => weights.len(),
        }
    }

    /// `true` when the request carries no weight records.
    pub fn is_empty( &self ) -> bool { self.len() == 0 }

    /// Re-encodes the request into its flat wire form. This is the host-side
    /// half of the protocol and the inverse of [`InterpolateEvent::decode`].
    pub fn encode( &self ) -> Vec<Value> {
        match self {
            Self::Vertex { target, vertex, weights } => {
                let mut words = Vec::with_capacity( 4 + weights.len() * 3 );
                words.push( Value::from( "vertex" ));
                words.push( Value::Handle( *target ));
                words.push( Value::Int( *vertex ));
                words.push( Value::Int( weights.len() as i32 ));
                for weight in weights {
                    words.push( Value::Handle( weight.source ));
                    words.push( Value::Int( weight.vertex ));
                    words.push( Value::Float( weight.weight ));
                }
                words
            }
            Self::Apex { target, face, apex, weights } => {
                let mut words = Vec::with_capacity( 5 + weights.len() * 4 );
                words.push( Value::from( "apex" ));
                words.push( Value::Handle( *target ));
                words.push( Value::Int( *face ));
                words.push( Value::Int( *apex ));
                words.push( Value::Int( weights.len() as i32 ));
                for weight in weights {
                    words.push( Value::Handle( weight.source ));
                    words.push( Value::Int( weight.face ));
                    words.push( Value::Int( weight.apex ));
                    words.push( Value::Float( weight.weight ));
                }
                words
            }
        }
    }

}

fn word_int( words: &[Value], index: usize ) -> Result<i32, PayloadError> {
    match words.get( index ) {
        Some( Value::Int( value )) => Ok( *value ),
        _ => Err( PayloadError::BadSlot( index )),
    }
}

fn word_float( words: &[Value], index: usize ) -> Result<f32, PayloadError> {
    match words.get( index ) {
        Some( Value::Float( value )) => Ok( *value ),
        _ => Err( PayloadError::BadSlot( index )),
    }
}

fn word_handle( words: &[Value], index: usize ) -> Result<Handle, PayloadError> {
    match words.get( index ) {
        Some( Value::Handle( value )) => Ok( *value ),
        _ => Err( PayloadError::BadSlot( index )),
    }
}

fn word_count( words: &[Value], index: usize ) -> Result<usize, PayloadError> {
    usize::try_from( word_int( words, index )? ).map_err(|_| PayloadError::BadSlot( index ))
}
