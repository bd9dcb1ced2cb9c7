use super::SourceKind;
use serde::Serialize;

/// A block of measure columns contributed by one census extract.
///
/// `COLUMNS` lists the source headers selected after `pcode_ts`. The headers
/// are the canonical output names, so selection and renaming coincide.
pub trait CensusSection: Sized {
    const SOURCE: SourceKind;
    const COLUMNS: &'static [&'static str];

    /// Build the section from values ordered as `COLUMNS`
    fn from_values(values: &[Option<f64>]) -> Self;

    /// Values ordered as `COLUMNS`
    fn values(&self) -> Vec<Option<f64>>;
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct HouseholdSize {
    pub mean_hhsize: Option<f64>,
    /// Households with 1..=9 members; the last bucket is 9 or more
    pub hh: [Option<f64>; 9],
}

impl CensusSection for HouseholdSize {
    const SOURCE: SourceKind = SourceKind::HouseholdSize;
    const COLUMNS: &'static [&'static str] = &[
        "mean_hhsize",
        "hh_1",
        "hh_2",
        "hh_3",
        "hh_4",
        "hh_5",
        "hh_6",
        "hh_7",
        "hh_8",
        "hh_9",
    ];

    fn from_values(values: &[Option<f64>]) -> Self {
        Self {
            mean_hhsize: values[0],
            hh: std::array::from_fn(|i| values[i + 1]),
        }
    }

    fn values(&self) -> Vec<Option<f64>> {
        std::iter::once(self.mean_hhsize)
            .chain(self.hh.iter().copied())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct LightSource {
    pub light_total: Option<f64>,
    pub electricity: Option<f64>,
    pub kerosene: Option<f64>,
    pub candle: Option<f64>,
    pub battery: Option<f64>,
    pub generator: Option<f64>,
    pub water_mill: Option<f64>,
    pub solar: Option<f64>,
    pub other: Option<f64>,
}

impl CensusSection for LightSource {
    const SOURCE: SourceKind = SourceKind::LightSource;
    const COLUMNS: &'static [&'static str] = &[
        "light_total",
        "electricity",
        "kerosene",
        "candle",
        "lbattery",
        "generator",
        "water",
        "solar",
        "other",
    ];

    fn from_values(values: &[Option<f64>]) -> Self {
        Self {
            light_total: values[0],
            electricity: values[1],
            kerosene: values[2],
            candle: values[3],
            battery: values[4],
            generator: values[5],
            water_mill: values[6],
            solar: values[7],
            other: values[8],
        }
    }

    fn values(&self) -> Vec<Option<f64>> {
        vec![
            self.light_total,
            self.electricity,
            self.kerosene,
            self.candle,
            self.battery,
            self.generator,
            self.water_mill,
            self.solar,
            self.other,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Transportation {
    pub total: Option<f64>,
    pub car: Option<f64>,
    pub motorcycle: Option<f64>,
    pub bicycle: Option<f64>,
    pub four_wheel_tractor: Option<f64>,
    pub canoe: Option<f64>,
    pub motor_boat: Option<f64>,
    pub cart: Option<f64>,
}

impl CensusSection for Transportation {
    const SOURCE: SourceKind = SourceKind::Transportation;
    const COLUMNS: &'static [&'static str] = &[
        "trans_t",
        "trans_car",
        "trans_mcyc",
        "trans_bicyc",
        "trans_4wheel",
        "trans_canoe",
        "trans_mboat",
        "trans_cart",
    ];

    fn from_values(values: &[Option<f64>]) -> Self {
        Self {
            total: values[0],
            car: values[1],
            motorcycle: values[2],
            bicycle: values[3],
            four_wheel_tractor: values[4],
            canoe: values[5],
            motor_boat: values[6],
            cart: values[7],
        }
    }

    fn values(&self) -> Vec<Option<f64>> {
        vec![
            self.total,
            self.car,
            self.motorcycle,
            self.bicycle,
            self.four_wheel_tractor,
            self.canoe,
            self.motor_boat,
            self.cart,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct HomeOwnership {
    pub total: Option<f64>,
    pub owner: Option<f64>,
    pub renter: Option<f64>,
    pub provided_free: Option<f64>,
    pub government_quarters: Option<f64>,
    pub company_quarters: Option<f64>,
    pub other: Option<f64>,
}

impl CensusSection for HomeOwnership {
    const SOURCE: SourceKind = SourceKind::HomeOwnership;
    const COLUMNS: &'static [&'static str] = &[
        "ownshp_t",
        "ownshp_own",
        "ownshp_rent",
        "ownshp_free",
        "ownshp_gov",
        "ownshp_com",
        "ownshp_oth",
    ];

    fn from_values(values: &[Option<f64>]) -> Self {
        Self {
            total: values[0],
            owner: values[1],
            renter: values[2],
            provided_free: values[3],
            government_quarters: values[4],
            company_quarters: values[5],
            other: values[6],
        }
    }

    fn values(&self) -> Vec<Option<f64>> {
        vec![
            self.total,
            self.owner,
            self.renter,
            self.provided_free,
            self.government_quarters,
            self.company_quarters,
            self.other,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Communication {
    pub total: Option<f64>,
    pub radio: Option<f64>,
    pub television: Option<f64>,
    pub landline: Option<f64>,
    pub mobile: Option<f64>,
    pub computer: Option<f64>,
    pub internet: Option<f64>,
}

impl CensusSection for Communication {
    const SOURCE: SourceKind = SourceKind::Communication;
    const COLUMNS: &'static [&'static str] = &[
        "com_t",
        "com_radio",
        "com_tv",
        "com_lline",
        "com_mob",
        "com_comp",
        "com_int",
    ];

    fn from_values(values: &[Option<f64>]) -> Self {
        Self {
            total: values[0],
            radio: values[1],
            television: values[2],
            landline: values[3],
            mobile: values[4],
            computer: values[5],
            internet: values[6],
        }
    }

    fn values(&self) -> Vec<Option<f64>> {
        vec![
            self.total,
            self.radio,
            self.television,
            self.landline,
            self.mobile,
            self.computer,
            self.internet,
        ]
    }
}
