//! Document-lifecycle payload decoding.

use itertools::Itertools ;

use crate::event::PayloadError ;



/// Identifier remapping table.
///
/// Carried by the insert-document event (one table for objects, one for
/// materials) and by the clipboard copy protocol. Wire shape is a
/// count-prefixed flat integer array:
///
/// ```text
/// [ count, old_0, new_0, .. old_count-1, new_count-1 ]
/// ```
#[derive( Clone, Debug, Default, PartialEq )]
pub struct IdTable {
    pairs: Vec<( i32, i32 )>,
}

impl IdTable {

    /// Decodes the flat wire form.
    ///
    /// The declared count is checked against the data actually present; an
    /// absent table decodes as empty. Trailing words beyond the declared
    /// count are not part of the table and are ignored.
    ///
    /// # Errors
    /// Fails when the declared count is negative or exceeds the pairs
    /// present.
    pub fn decode( words: &[i32] ) -> Result<Self, PayloadError> {
        let Some(( declared, rest )) = words.split_first() else {
            return Ok( Self::default() );
        };
        let declared = usize::try_from( *declared ).map_err(|_| PayloadError::BadSlot( 0 ))?;
        let pairs: Vec<( i32, i32 )> = rest.iter().copied().tuples().take( declared ).collect();
        match pairs.len() < declared {
            true => Err( PayloadError::ShortTable { declared, found: pairs.len() }),
            false => Ok( Self { pairs }),
        }
    }

    /// Translates an identifier from the source document into the receiving
    /// document. Returns `None` when the source id is unknown.
    pub fn translate( &self, old: i32 ) -> Option<i32> {
        self.pairs.iter()
            .find(|( from, _ )| *from == old )
            .map(|( _, to )| *to )
    }

    /// Pair count.
    #[inline] pub fn len( &self ) -> usize { self.pairs.len() }

    /// `true` when the table holds no pairs.
    #[inline] pub fn is_empty( &self ) -> bool { self.pairs.is_empty() }

    /// Iterates `( old, new )` pairs in wire order.
    pub fn iter( &self ) -> impl Iterator<Item = ( i32, i32 )> + '_ {
        self.pairs.iter().copied()
    }

    /// Re-encodes the table into its flat wire form.
    pub fn encode( &self ) -> Vec<i32> {
        let mut words = Vec::with_capacity( 1 + self.pairs.len() * 2 );
        words.push( self.pairs.len() as i32 );
        for ( old, new ) in &self.pairs {
            words.push( *old );
            words.push( *new );
        }
        words
    }

}

impl FromIterator<( i32, i32 )> for IdTable {
    fn from_iter<I: IntoIterator<Item = ( i32, i32 )>>( pairs: I ) -> Self {
        Self { pairs: pairs.into_iter().collect() }
    }
}
