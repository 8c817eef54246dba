use scene_link::{ Dispatcher, EventCode, Handle, InterpolateEvent, Outcome, Payload, Value, VertexWeight };

use crate::recorder::{ Recorder, StationOnly };

fn vertex_payload( target: Handle, vertex: i32, weights: &[VertexWeight] ) -> Vec<Value> {
	let mut words = vec![
		Value::from( "vertex" ),
		Value::Handle( target ),
		Value::Int( vertex ),
		Value::Int( weights.len() as i32 ),
	];
	for weight in weights {
		words.push( Value::Handle( weight.source ));
		words.push( Value::Int( weight.vertex ));
		words.push( Value::Float( weight.weight ));
	}
	words
}

fn weights( count: usize ) -> Vec<VertexWeight> {
	( 0..count ).map(| index | VertexWeight {
		source: Handle::new( 100 + index as u64 ),
		vertex: index as i32 * 3,
		weight: index as f32 * 0.25,
	}).collect()
}

#[test]
fn decoded_records_match_for_every_count() {

	for count in [ 0usize, 1, 4, 5, 1000 ] {

		let expected = weights( count );
		let words = vertex_payload( Handle::new( 1 ), 7, &expected );

		let mut recorder = Recorder::default();
		recorder.interpolate_ok = true ;
		let mut dispatcher = Dispatcher::new( StationOnly( recorder ));

		let outcome = dispatcher.dispatch( EventCode::INTERPOLATE, Payload::Seq( &words )).unwrap();
		assert_eq!( outcome, Outcome::Handled, "count {}", count );
		assert_eq!( dispatcher.module().0.vertex_weights.len(), count, "count {}", count );
		assert_eq!( dispatcher.module().0.vertex_weights, expected, "count {}", count );

	}

}

#[test]
fn storage_strategy_switches_without_changing_content() {

	// Four records stay inline, five spill to the heap; decoded content
	// must be identical either way.
	for ( count, expect_spilled ) in [ ( 4usize, false ), ( 5, true )] {

		let expected = weights( count );
		let words = vertex_payload( Handle::new( 2 ), 0, &expected );

		let event = InterpolateEvent::decode( Payload::Seq( &words )).unwrap();
		match &event {
			InterpolateEvent::Vertex { weights, .. } => {
				assert_eq!( weights.spilled(), expect_spilled, "count {}", count );
				assert_eq!( weights.as_slice(), expected.as_slice(), "count {}", count );
			}
			InterpolateEvent::Apex { .. } => panic!( "decoded the wrong sub-kind" ),
		}

	}

}

#[test]
fn encode_is_the_inverse_of_decode() {

	let expected = weights( 3 );
	let words = vertex_payload( Handle::new( 5 ), 11, &expected );

	let event = InterpolateEvent::decode( Payload::Seq( &words )).unwrap();
	assert_eq!( event.encode(), words );

}
