use scene_link::{ ApexWeight, Dispatcher, EventCode, Handle, Outcome, Payload, Value };

use crate::recorder::{ Recorder, StationOnly };

fn apex_payload( target: Handle, face: i32, apex: i32, weights: &[ApexWeight] ) -> Vec<Value> {
	let mut words = vec![
		Value::from( "apex" ),
		Value::Handle( target ),
		Value::Int( face ),
		Value::Int( apex ),
		Value::Int( weights.len() as i32 ),
	];
	for weight in weights {
		words.push( Value::Handle( weight.source ));
		words.push( Value::Int( weight.face ));
		words.push( Value::Int( weight.apex ));
		words.push( Value::Float( weight.weight ));
	}
	words
}

#[test]
fn apex_records_decode_with_their_longer_layout() {

	let expected = vec![
		ApexWeight { source: Handle::new( 8 ), face: 2, apex: 0, weight: 0.75 },
		ApexWeight { source: Handle::new( 9 ), face: 4, apex: 1, weight: 0.25 },
	];
	let words = apex_payload( Handle::new( 3 ), 6, 2, &expected );

	let mut recorder = Recorder::default();
	recorder.interpolate_ok = true ;
	let mut dispatcher = Dispatcher::new( StationOnly( recorder ));

	let outcome = dispatcher.dispatch( EventCode::INTERPOLATE, Payload::Seq( &words )).unwrap();
	assert_eq!( outcome, Outcome::Handled );
	assert_eq!( dispatcher.module().0.calls, vec![ "interpolate_apex" ]);
	assert_eq!( dispatcher.module().0.apex_weights, expected );

}

#[test]
fn empty_apex_table_still_reaches_the_handler() {

	let words = apex_payload( Handle::new( 3 ), 0, 0, &[] );

	let mut recorder = Recorder::default();
	recorder.interpolate_ok = true ;
	let mut dispatcher = Dispatcher::new( StationOnly( recorder ));

	let outcome = dispatcher.dispatch( EventCode::INTERPOLATE, Payload::Seq( &words )).unwrap();
	assert_eq!( outcome, Outcome::Handled );
	assert!( dispatcher.module().0.apex_weights.is_empty() );

}
