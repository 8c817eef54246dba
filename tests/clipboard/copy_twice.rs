use scene_link::{ ArgList, ClipboardError, CopyBuffer, Dispatcher, EventCode, Handle, Outcome, Payload };

use crate::recorder::{ Recorder, StationOnly };

#[test]
fn second_allocation_fails_without_mutating_the_first() {

	let mut recorder = Recorder::default();
	recorder.copy_bytes = Some( vec![ 9, 9 ]);
	recorder.try_second_put = true ;
	let mut dispatcher = Dispatcher::new( StationOnly( recorder ));

	let mut payload = ArgList::new()
		.arg( "copy", true )
		.arg( "object", Handle::new( 5 ));
	let data = payload.out( "data" );
	let size = payload.out( "size" );

	let outcome = dispatcher.dispatch( EventCode::CLIPBOARD, Payload::Args( &payload )).unwrap();
	assert_eq!( outcome, Outcome::Handled );

	assert_eq!(
		dispatcher.module().0.second_put,
		Some( Err( ClipboardError::AlreadyAllocated )),
	);
	assert_eq!( data.take_blob(), Some( vec![ 9, 9 ]));
	assert_eq!( size.take_int(), Some( 2 ));

}

#[test]
fn buffer_rejects_a_second_put_directly() {

	let mut buffer = CopyBuffer::new();
	assert!( !buffer.is_allocated() );

	buffer.put( vec![ 1, 2 ]).expect( "first allocation" );
	assert!( buffer.is_allocated() );

	assert_eq!( buffer.put( vec![ 3 ]), Err( ClipboardError::AlreadyAllocated ));
	assert_eq!( buffer.into_data(), Some( vec![ 1, 2 ]));

}
