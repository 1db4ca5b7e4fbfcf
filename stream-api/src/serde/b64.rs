use serde::ser::Serializer;

pub fn serialize<T: AsRef<[u8]>, S: Serializer>(v: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&base64::encode(v.as_ref()))
}
