use crate::model::id::{CustomerId, ReservationId};
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};
use shared::error::{AppError, AppResult};

pub mod event;

// datetime-local 入力欄の形式と、その区切りを空白にした形式
const NAIVE_START_AT_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: ReservationId,
    pub customer_id: CustomerId,
    pub num_guests: NumGuests,
    pub start_at: DateTime<Local>,
    pub notes: String,
}

impl Reservation {
    // 例: June 5th 2024, 12:30 pm
    pub fn formatted_start_at(&self) -> String {
        let day = self.start_at.day();
        format!(
            "{} {}{} {}",
            self.start_at.format("%B"),
            day,
            ordinal_suffix(day),
            self.start_at.format("%Y, %-I:%M %P"),
        )
    }

    // 一覧画面向けの短い形式。例: 06/05/2024 @ 12:30 pm
    pub fn summary_start_at(&self) -> String {
        self.start_at.format("%m/%d/%Y @ %-I:%M %P").to_string()
    }
}

// 予約人数。1 名以上であることを保証する
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NumGuests(i32);

impl NumGuests {
    pub fn new(value: i32) -> AppResult<Self> {
        if value >= 1 {
            Ok(Self(value))
        } else {
            Err(AppError::BadRequest(format!(
                "numGuests must be at least 1 (got {value})"
            )))
        }
    }

    pub fn parse(raw: &str) -> AppResult<Self> {
        let value = raw.trim().parse::<i32>().map_err(|_| {
            AppError::BadRequest(format!("numGuests must be a whole number (got {raw:?})"))
        })?;
        Self::new(value)
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

// フォームから受け取った開始日時を解釈する。
// オフセットのない値はサーバーのローカルタイムとして扱い、日付のみの場合は 0 時とする。
// 夏時間の切り替えで存在しない・曖昧になる時刻は受け付けない
pub fn parse_start_at(raw: &str) -> AppResult<DateTime<Local>> {
    let trimmed = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Local));
    }

    NAIVE_START_AT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .and_then(|naive| naive.and_local_timezone(Local).single())
        .ok_or_else(|| AppError::BadRequest(format!("startAt is not a valid date/time: {raw:?}")))
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}
