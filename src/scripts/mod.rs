pub mod strobe;

use crate::error::StrobeError;
use crate::pixelmap::PixelMap;
use crate::property::PropertyDescriptor;

/// The calling convention the RGB matrix uses for every script, whether or
/// not a given script cares about all of the arguments.
pub trait RgbScript<C> {
    fn api_version(&self) -> u32;
    fn name(&self) -> &str;
    fn author(&self) -> &str;
    /// 1 if the script wants the user's color passed to `rgb_map`.
    fn accept_colors(&self) -> u32;
    fn properties(&self) -> Vec<PropertyDescriptor>;

    fn rgb_map_step_count(&self, width: usize, height: usize) -> Result<u32, StrobeError>;
    fn rgb_map(
        &self,
        width: usize,
        height: usize,
        color: C,
        step: u32,
    ) -> Result<PixelMap<C>, StrobeError>;

    /// `name` may be the property id or the setter name from its descriptor.
    fn write_property(&mut self, name: &str, value: &str) -> Result<(), StrobeError>;
    /// `name` may be the property id or the getter name from its descriptor.
    fn read_property(&self, name: &str) -> Result<String, StrobeError>;
}

pub fn describe<C, S: RgbScript<C> + ?Sized>(script: &S) -> json::JsonValue {
    let properties: Vec<json::JsonValue> = script
        .properties()
        .iter()
        .filter(|p| match p.validate() {
            Ok(()) => true,
            Err(err) => {
                log::warn!("{}: leaving out property {}: {}", script.name(), p.name, err);
                false
            }
        })
        .map(|p| p.to_string().into())
        .collect();

    json::object! {
        apiVersion: script.api_version(),
        name: script.name(),
        author: script.author(),
        acceptColors: script.accept_colors(),
        properties: properties,
    }
}

#[cfg(test)]
mod tests {
    use super::strobe::Strobe;
    use super::*;
    use crate::hostcolor::HostColor;

    #[test]
    fn describes_strobe() {
        let strobe = Strobe::new();
        let meta = describe::<HostColor, _>(&strobe);
        assert_eq!(meta["apiVersion"], 2);
        assert_eq!(meta["name"], "Strobe");
        assert_eq!(meta["author"], "Rob Nieuwenhuizen");
        assert_eq!(meta["acceptColors"], 1);
        assert_eq!(meta["properties"].len(), 1);
        assert_eq!(
            meta["properties"][0],
            "name:freq|type:range|display:Frequency|values:2,10|write:setFreq|read:getFreq"
        );
    }

    #[test]
    fn scripts_work_behind_trait_objects() {
        let mut script: Box<dyn RgbScript<HostColor>> = Box::new(Strobe::new());
        script.write_property("setFreq", "3").unwrap();
        assert_eq!(script.read_property("getFreq").unwrap(), "3");
        assert_eq!(script.rgb_map_step_count(8, 8).unwrap(), 3);

        let meta = describe(script.as_ref());
        assert_eq!(meta["name"], "Strobe");
    }
}
