//! Postgres column adapter for [`Trn`].
//!
//! The persisted representation is the encoded (base32) wire form in a
//! `TEXT` column. Writes encode; reads decode, so every value coming back
//! from storage passes the same structural validation as [`Trn::decode`].

use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef};
use sqlx::{Decode, Encode, Postgres, Type};

use crate::Trn;

impl Type<Postgres> for Trn {
    fn type_info() -> PgTypeInfo {
        <&str as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <&str as Type<Postgres>>::compatible(ty)
    }
}

impl Encode<'_, Postgres> for Trn {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        <String as Encode<'_, Postgres>>::encode_by_ref(&self.encode(), buf)
    }
}

impl<'r> Decode<'r, Postgres> for Trn {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let encoded = <&str as Decode<'r, Postgres>>::decode(value)?;
        Ok(Trn::decode(encoded)?)
    }
}
