//! User-facing text for English and Traditional Chinese
//!
//! Front ends pick a [`Translations`] table once and pass it down by
//! reference. The formula engine never sees any of this text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CalcError, DomainError, FormatError};

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    /// Traditional Chinese
    #[default]
    Zh,
}

impl Language {
    /// Parse a language code, falling back to the default for unknown codes
    pub fn from_code_or_default(code: &str) -> Self {
        code.parse().unwrap_or_default()
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "zh" | "zh-hant" | "zh-tw" | "zh-hk" | "chinese" => Ok(Language::Zh),
            _ => Err(format!("Unsupported language: {}", s)),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Label and message table for one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translations {
    pub language: Language,

    // EpH calculator
    pub eph_title: &'static str,
    pub mode_label: &'static str,
    pub mode_eph: &'static str,
    pub mode_time: &'static str,
    pub distance_label: &'static str,
    pub elevation_label: &'static str,
    pub time_label: &'static str,
    pub eph_label: &'static str,
    pub total_ep_prefix: &'static str,
    pub result_eph_prefix: &'static str,
    pub result_time_prefix: &'static str,
    pub error_mode: &'static str,
    pub error_invalid: &'static str,
    pub error_time_format: &'static str,
    pub error_time_required: &'static str,
    pub error_eph_required: &'static str,
    pub error_time_positive: &'static str,
    pub error_eph_positive: &'static str,

    // Track calculator
    pub track_title: &'static str,
    pub pace_label: &'static str,
    pub track_distance_label: &'static str,
    pub total_time_label: &'static str,
    pub splits_title: &'static str,
    pub split_100m: &'static str,
    pub split_200m: &'static str,
    pub split_300m: &'static str,
    pub split_400m: &'static str,
    pub races_title: &'static str,
    pub race_10k: &'static str,
    pub race_half_marathon: &'static str,
    pub race_marathon: &'static str,
    pub laps_title: &'static str,
    pub full_laps_label: &'static str,
    pub remaining_meters_label: &'static str,
    pub lap_time_label: &'static str,
    pub hundred_time_label: &'static str,
    pub lap_label: &'static str,
    pub error_pace_format: &'static str,
    pub error_pace_minutes: &'static str,
    pub error_pace_seconds: &'static str,
    pub error_distance_format: &'static str,
    pub error_distance_negative: &'static str,
    pub error_distance_too_large: &'static str,
}

static EN: Translations = Translations {
    language: Language::En,
    eph_title: "EpH Calculator",
    mode_label: "Calculation Mode:",
    mode_eph: "Calculate EpH",
    mode_time: "Calculate Estimated Time",
    distance_label: "Distance (km):",
    elevation_label: "Elevation Gain (m):",
    time_label: "Time (hh:mm:ss or hh:mm):",
    eph_label: "EpH Value:",
    total_ep_prefix: "Total EP",
    result_eph_prefix: "EpH",
    result_time_prefix: "Estimated Completion Time",
    error_mode: "Please select a valid calculation mode",
    error_invalid: "Please enter valid values",
    error_time_format: "Invalid time format",
    error_time_required: "Time is required for EpH calculation",
    error_eph_required: "EpH value is required for time calculation",
    error_time_positive: "Time must be greater than 0",
    error_eph_positive: "EpH must be greater than 0",
    track_title: "400m Track Calculator",
    pace_label: "Enter your pace (min:sec per km):",
    track_distance_label: "Distance (e.g., 3KM, 8km):",
    total_time_label: "Total Time for 400m:",
    splits_title: "Split Times:",
    split_100m: "100m",
    split_200m: "200m",
    split_300m: "300m",
    split_400m: "400m",
    races_title: "Race Projections:",
    race_10k: "10 km",
    race_half_marathon: "Half Marathon",
    race_marathon: "Marathon",
    laps_title: "Lap Plan:",
    full_laps_label: "Number of 400m laps:",
    remaining_meters_label: "Additional meters:",
    lap_time_label: "Time per 400m lap:",
    hundred_time_label: "Time per 100m:",
    lap_label: "Lap",
    error_pace_format: "Invalid pace format. Use M:SS (e.g., 4:30) or M (e.g., 7)",
    error_pace_minutes: "Pace minutes must be between 0 and 60",
    error_pace_seconds: "Seconds must be between 0 and 59",
    error_distance_format: "Invalid distance format. Use a number followed by KM (e.g., 3KM, 8km)",
    error_distance_negative: "Distance cannot be negative",
    error_distance_too_large: "Distance cannot exceed 1000 km for a lap plan",
};

static ZH: Translations = Translations {
    language: Language::Zh,
    eph_title: "EpH計算器",
    mode_label: "計算模式：",
    mode_eph: "計算EpH",
    mode_time: "計算預計時間",
    distance_label: "距離 (公里)：",
    elevation_label: "爬升高度 (米)：",
    time_label: "耗時 (hh:mm:ss 或 hh:mm)：",
    eph_label: "EpH值：",
    total_ep_prefix: "總Ep",
    result_eph_prefix: "EpH",
    result_time_prefix: "預計完成時間",
    error_mode: "請選擇有效的計算模式",
    error_invalid: "請輸入有效的數值",
    error_time_format: "無效的時間格式",
    error_time_required: "計算EpH需要輸入耗時",
    error_eph_required: "計算預計時間需要輸入EpH值",
    error_time_positive: "耗時必須大於0",
    error_eph_positive: "EpH必須大於0",
    track_title: "400米賽道計算器",
    pace_label: "輸入配速 (分:秒/公里)：",
    track_distance_label: "距離 (例如：3KM、8km)：",
    total_time_label: "400米總時間：",
    splits_title: "分段時間：",
    split_100m: "100米",
    split_200m: "200米",
    split_300m: "300米",
    split_400m: "400米",
    races_title: "比賽預測：",
    race_10k: "10公里",
    race_half_marathon: "半程馬拉松",
    race_marathon: "全程馬拉松",
    laps_title: "圈數計劃：",
    full_laps_label: "400米圈數：",
    remaining_meters_label: "額外米數：",
    lap_time_label: "每圈400米時間：",
    hundred_time_label: "每100米時間：",
    lap_label: "圈",
    error_pace_format: "無效的配速格式。請使用 M:SS 格式（例如：4:30）或 M 格式（例如：7）",
    error_pace_minutes: "配速分鐘必須介於0至60之間",
    error_pace_seconds: "秒數必須介於0至59之間",
    error_distance_format: "無效的距離格式。請輸入數字加KM（例如：3KM、8km）",
    error_distance_negative: "距離不能為負數",
    error_distance_too_large: "圈數計劃的距離不能超過1000公里",
};

impl Translations {
    pub fn for_language(language: Language) -> &'static Translations {
        match language {
            Language::En => &EN,
            Language::Zh => &ZH,
        }
    }

    /// Localized message for an engine error
    pub fn calc_error(&self, err: &CalcError) -> &'static str {
        match err {
            CalcError::Format(FormatError::InvalidTime { .. }) => self.error_time_format,
            CalcError::Format(FormatError::InvalidPace { .. }) => self.error_pace_format,
            CalcError::Format(FormatError::NegativeMinutes { .. })
            | CalcError::Format(FormatError::MinutesTooLarge { .. }) => self.error_pace_minutes,
            CalcError::Format(FormatError::SecondsOutOfRange { .. }) => self.error_pace_seconds,
            CalcError::Format(FormatError::InvalidDistance { .. }) => self.error_distance_format,
            CalcError::Domain(DomainError::NonPositiveHours { .. }) => self.error_time_positive,
            CalcError::Domain(DomainError::NonPositiveEph { .. }) => self.error_eph_positive,
            CalcError::Domain(DomainError::NegativeDistance { .. }) => self.error_distance_negative,
            CalcError::Domain(DomainError::DistanceTooLarge { .. }) => self.error_distance_too_large,
        }
    }
}
