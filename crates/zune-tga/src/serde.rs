#![cfg(feature = "serde")]

use alloc::format;

use serde::ser::*;

use crate::header::{TgaHeader, TgaImageType, TgaOrigin};

impl Serialize for TgaImageType {
    #[allow(clippy::uninlined_format_args)]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.serialize_str(&format!("{:?}", self))
    }
}

impl Serialize for TgaOrigin {
    #[allow(clippy::uninlined_format_args)]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.serialize_str(&format!("{:?}", self))
    }
}

impl Serialize for TgaHeader {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        // same field names as the header object of other TGA loaders,
        // image type is written as its numeric code
        let mut state = serializer.serialize_struct("TgaHeader", 15)?;
        state.serialize_field("idLength", &self.id_length)?;
        state.serialize_field("colorMapType", &self.color_map_type)?;
        state.serialize_field("imageType", &self.image_type.to_u8())?;
        state.serialize_field("colorMapIndex", &self.color_map_index)?;
        state.serialize_field("colorMapLength", &self.color_map_length)?;
        state.serialize_field("colorMapDepth", &self.color_map_depth)?;
        state.serialize_field("offsetX", &self.offset_x)?;
        state.serialize_field("offsetY", &self.offset_y)?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("pixelDepth", &self.pixel_depth)?;
        state.serialize_field("flags", &self.flags)?;
        state.serialize_field("hasEncoding", &self.has_encoding())?;
        state.serialize_field("hasColorMap", &self.has_color_map())?;
        state.serialize_field("isGreyColor", &self.is_grey_color())?;
        state.end()
    }
}
