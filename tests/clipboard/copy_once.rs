use scene_link::{ ArgList, Dispatcher, EventCode, Handle, Outcome, Payload };

use crate::recorder::{ Recorder, StationOnly };

fn copy_payload( tag: &str ) -> ArgList {
	ArgList::new()
		.arg( tag, true )
		.arg( "object", Handle::new( 5 ))
		.arg( "object_table", vec![ 1, 7, 0 ])
		.arg( "material_table", vec![ 0 ])
}

#[test]
fn copy_hands_back_buffer_and_size() {

	let mut recorder = Recorder::default();
	recorder.copy_bytes = Some( vec![ 1, 2, 3, 4 ]);
	let mut dispatcher = Dispatcher::new( StationOnly( recorder ));

	let mut payload = copy_payload( "copy" );
	let data = payload.out( "data" );
	let size = payload.out( "size" );

	let outcome = dispatcher.dispatch( EventCode::CLIPBOARD, Payload::Args( &payload )).unwrap();
	assert_eq!( outcome, Outcome::Handled );
	assert_eq!( size.take_int(), Some( 4 ));
	assert_eq!( data.take_blob(), Some( vec![ 1, 2, 3, 4 ]));
	assert_eq!( dispatcher.module().0.last_cut, Some( false ));

}

#[test]
fn cut_sets_the_cut_flag() {

	let mut recorder = Recorder::default();
	recorder.copy_bytes = Some( vec![ 1 ]);
	let mut dispatcher = Dispatcher::new( StationOnly( recorder ));

	let mut payload = copy_payload( "cut" );
	let _data = payload.out( "data" );
	let _size = payload.out( "size" );

	let outcome = dispatcher.dispatch( EventCode::CLIPBOARD, Payload::Args( &payload )).unwrap();
	assert_eq!( outcome, Outcome::Handled );
	assert_eq!( dispatcher.module().0.last_cut, Some( true ));

}

#[test]
fn copy_without_an_allocation_is_not_handled() {

	let mut dispatcher = Dispatcher::new( StationOnly( Recorder::default() ));

	let mut payload = copy_payload( "copy" );
	let data = payload.out( "data" );
	let size = payload.out( "size" );

	let outcome = dispatcher.dispatch( EventCode::CLIPBOARD, Payload::Args( &payload )).unwrap();
	assert_eq!( outcome, Outcome::NotHandled );
	assert!( !data.is_set() );
	assert!( !size.is_set() );

}
