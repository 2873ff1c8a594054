use crate::error::StrobeError;
use crate::pixelmap::{Cell, PixelMap};
use crate::property::PropertyDescriptor;
use crate::scripts::RgbScript;

const DEFAULT_FREQUENCY: i64 = 2;

/// What the last frequency write left behind. Zero and negative values are
/// kept as-is and only rejected when a map is requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frequency {
    Set(i64),
    Unparseable(String),
}

impl Frequency {
    fn parse(raw: &str) -> Frequency {
        match raw.trim().parse::<i64>() {
            Ok(freq) => Frequency::Set(freq),
            Err(_) => Frequency::Unparseable(raw.to_string()),
        }
    }
}

/// Blinks the whole matrix: the first step of every `frequency` steps is lit
/// with the user's color, the rest are dark.
pub struct Strobe {
    frequency: Frequency,
}

impl Strobe {
    pub fn new() -> Strobe {
        Strobe {
            frequency: Frequency::Set(DEFAULT_FREQUENCY),
        }
    }

    fn freq_property() -> PropertyDescriptor {
        PropertyDescriptor::range("freq", "Frequency", 2, 10, "setFreq", "getFreq")
    }

    /// Stores the frequency typed into the host widget. On a parse failure the
    /// raw text is kept, and this and every later query reports
    /// `UnparseableFrequency` until a valid value is written.
    pub fn set_frequency(&mut self, value: &str) -> Result<(), StrobeError> {
        match Frequency::parse(value) {
            Frequency::Set(freq) => {
                self.store(freq);
                Ok(())
            }
            Frequency::Unparseable(raw) => {
                log::warn!("Rejecting strobe frequency {raw:?}");
                self.frequency = Frequency::Unparseable(raw.clone());
                Err(StrobeError::UnparseableFrequency(raw))
            }
        }
    }

    pub fn set_frequency_value(&mut self, freq: i64) {
        self.store(freq);
    }

    fn store(&mut self, freq: i64) {
        if !Strobe::freq_property().accepts(freq) {
            log::warn!("Frequency {freq} is outside the range offered to the user");
        }
        log::debug!("Strobe frequency set to {freq}");
        self.frequency = Frequency::Set(freq);
    }

    /// Whether the stored value is one the frequency widget could have produced.
    pub fn in_widget_range(&self) -> bool {
        match self.frequency {
            Frequency::Set(freq) => Strobe::freq_property().accepts(freq),
            Frequency::Unparseable(_) => false,
        }
    }

    pub fn get_frequency(&self) -> Result<i64, StrobeError> {
        match &self.frequency {
            Frequency::Set(freq) => Ok(*freq),
            Frequency::Unparseable(raw) => Err(StrobeError::UnparseableFrequency(raw.clone())),
        }
    }

    pub fn frequency(&self) -> &Frequency {
        &self.frequency
    }

    fn period(&self) -> Result<u32, StrobeError> {
        let freq = self.get_frequency()?;
        if freq < 1 {
            return Err(StrobeError::FrequencyOutOfRange(freq));
        }
        u32::try_from(freq).map_err(|_| StrobeError::FrequencyOutOfRange(freq))
    }
}

impl Default for Strobe {
    fn default() -> Self {
        Strobe::new()
    }
}

impl<C: Clone> RgbScript<C> for Strobe {
    fn api_version(&self) -> u32 {
        2
    }

    fn name(&self) -> &str {
        "Strobe"
    }

    fn author(&self) -> &str {
        "Rob Nieuwenhuizen"
    }

    fn accept_colors(&self) -> u32 {
        1
    }

    fn properties(&self) -> Vec<PropertyDescriptor> {
        vec![Strobe::freq_property()]
    }

    fn rgb_map_step_count(&self, _width: usize, _height: usize) -> Result<u32, StrobeError> {
        self.period()
    }

    fn rgb_map(
        &self,
        width: usize,
        height: usize,
        color: C,
        step: u32,
    ) -> Result<PixelMap<C>, StrobeError> {
        let period = self.period()?;
        let cell = if step % period != 0 {
            Cell::Off
        } else {
            Cell::Color(color)
        };
        Ok(PixelMap::filled(width, height, cell))
    }

    fn write_property(&mut self, name: &str, value: &str) -> Result<(), StrobeError> {
        if Strobe::freq_property().answers_to(name) {
            return self.set_frequency(value);
        }
        Err(StrobeError::UnknownProperty(name.to_string()))
    }

    fn read_property(&self, name: &str) -> Result<String, StrobeError> {
        if Strobe::freq_property().answers_to(name) {
            return self.get_frequency().map(|freq| freq.to_string());
        }
        Err(StrobeError::UnknownProperty(name.to_string()))
    }
}
