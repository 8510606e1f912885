use crate::errors::{ApiError, ApplicationError};
use crate::utils::dates;
use crate::validators::{self, append_validation_error, max_length, optional_date, required};
use chevre::factory::*;
use chrono::Duration;
use validator::{Validate, ValidationErrors};

pub const TRANSLATION_TYPE_SUBTITLES: &str = "0";
pub const TRANSLATION_TYPE_DUBBED: &str = "1";
pub const MVTK_FLAG_ACCEPTED: &str = "1";

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct WorkPerformedForm {
    #[serde(default)]
    pub identifier: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct HeadlineForm {
    #[serde(default)]
    pub ja: String,
}

/// Screening event series edit form. Sent by the add and edit screens and returned to prefill them.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ScreeningEventSeriesForm {
    pub work_performed: WorkPerformedForm,
    #[validate(length(max = 64, message = "Title must be 64 characters or fewer"))]
    pub name_ja: String,
    pub name_en: String,
    #[validate(length(max = 64, message = "Kana title must be 64 characters or fewer"))]
    pub kana_name: String,
    /// Movie theater id.
    pub location_id: String,
    pub start_date: String,
    pub end_date: String,
    pub headline: HeadlineForm,
    pub summary_start_day: String,
    pub video_format_type: Vec<String>,
    pub sound_format_type: Vec<String>,
    pub mvtk_flg: String,
    pub translation_type: String,
    pub signage_display_name: String,
    pub signage_dislay_subtitle_name: String,
    pub description: String,
    /// Running time in minutes. Display only; the movie's duration is stored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl ScreeningEventSeriesForm {
    pub fn validate_record(&self) -> Result<(), ValidationErrors> {
        let mut validation_errors = self.validate();
        validation_errors = append_validation_error(
            validation_errors,
            "workPerformed.identifier",
            required(&self.work_performed.identifier, "Movie code is required"),
        );
        validation_errors = append_validation_error(
            validation_errors,
            "workPerformed.identifier",
            max_length(&self.work_performed.identifier, "Movie code must be 64 characters or fewer"),
        );
        validation_errors = append_validation_error(
            validation_errors,
            "nameJa",
            required(&self.name_ja, "Title is required"),
        );
        validation_errors = append_validation_error(
            validation_errors,
            "startDate",
            optional_date(&Some(self.start_date.clone()), "First screening day is not a valid date"),
        );
        validation_errors = append_validation_error(
            validation_errors,
            "endDate",
            optional_date(&Some(self.end_date.clone()), "Last screening day is not a valid date"),
        );
        validation_errors = append_validation_error(
            validation_errors,
            "headline.ja",
            max_length(&self.headline.ja, "Subtitle must be 64 characters or fewer"),
        );
        validation_errors = append_validation_error(
            validation_errors,
            "summaryStartDay",
            required(&self.summary_start_day, "Summary start weekday is required"),
        );
        append_validation_error(
            validation_errors,
            "videoFormatType",
            validators::required_list(&self.video_format_type, "Select at least one video format"),
        )
    }

    /// Prefills the edit screen from a stored series.
    pub fn from_series(series: &ScreeningEventSeries) -> ScreeningEventSeriesForm {
        let attributes = &series.attributes;
        let translation_type = if attributes.dub_language.is_some() {
            TRANSLATION_TYPE_DUBBED
        } else if attributes.subtitle_language.is_some() {
            TRANSLATION_TYPE_SUBTITLES
        } else {
            ""
        };
        let property = |name: &str| attributes.additional_property(name).unwrap_or("").to_string();

        ScreeningEventSeriesForm {
            work_performed: WorkPerformedForm {
                identifier: attributes.work_performed.identifier.clone(),
            },
            name_ja: attributes.name.ja.clone(),
            name_en: attributes.name.en.clone(),
            kana_name: attributes.kana_name.clone().unwrap_or_default(),
            location_id: attributes.location.id.clone().unwrap_or_default(),
            start_date: attributes
                .start_date
                .map(|d| dates::format_day(dates::jst_date(d)))
                .unwrap_or_default(),
            end_date: attributes
                .end_date
                .map(|d| dates::format_day(dates::jst_date(d) - Duration::days(1)))
                .unwrap_or_default(),
            headline: HeadlineForm {
                ja: attributes.headline.as_ref().map(|h| h.ja.clone()).unwrap_or_default(),
            },
            summary_start_day: property(ADDITIONAL_PROPERTY_SUMMARY_START_DAY),
            video_format_type: attributes.video_format.iter().map(|f| f.type_of.clone()).collect(),
            sound_format_type: attributes.sound_format.iter().map(|f| f.type_of.clone()).collect(),
            mvtk_flg: (if attributes.accepts_movie_ticket() { "1" } else { "0" }).to_string(),
            translation_type: translation_type.to_string(),
            signage_display_name: property(ADDITIONAL_PROPERTY_SIGNAGE_DISPLAY_NAME),
            signage_dislay_subtitle_name: property(ADDITIONAL_PROPERTY_SIGNAGE_DISPLAY_SUBTITLE_NAME),
            description: attributes.description.as_ref().map(|d| d.ja.clone()).unwrap_or_default(),
            duration: attributes.duration.as_deref().and_then(dates::iso_duration_minutes),
        }
    }

    /// Attributes to store. On update, languages the form leaves out are removed from the record.
    pub fn to_attributes(
        &self,
        project: &Project,
        movie: &Movie,
        theater: &MovieTheater,
        is_new: bool,
    ) -> Result<ScreeningEventSeriesAttributes, ApiError> {
        let duration = movie
            .duration
            .clone()
            .ok_or_else(|| ApplicationError::unprocessable("The movie has no running time registered"))?;
        let start_date = match non_empty(&self.start_date) {
            Some(day) => Some(dates::start_of_day(dates::parse_date(&day)?)),
            None => None,
        };
        let end_date = match non_empty(&self.end_date) {
            Some(day) => Some(dates::start_of_day(dates::parse_date(&day)?) + Duration::days(1)),
            None => None,
        };
        let accepted_payment_method = if self.mvtk_flg == MVTK_FLAG_ACCEPTED {
            PaymentMethodType::all()
        } else {
            PaymentMethodType::all_except(PaymentMethodType::MovieTicket)
        };
        let subtitle_language = if self.translation_type == TRANSLATION_TYPE_SUBTITLES {
            Some(Language::japanese())
        } else {
            None
        };
        let dub_language = if self.translation_type == TRANSLATION_TYPE_DUBBED {
            Some(Language::japanese())
        } else {
            None
        };
        let unset = if is_new {
            None
        } else {
            Some(UnsetFields {
                subtitle_language: subtitle_language.as_ref().map_or(Some(1), |_| None),
                dub_language: dub_language.as_ref().map_or(Some(1), |_| None),
            })
            .filter(|u| !u.is_empty())
        };

        Ok(ScreeningEventSeriesAttributes {
            project: project.clone(),
            type_of: EventType::ScreeningEventSeries,
            name: MultilingualString::with_empty_kr(&self.name_ja, &self.name_en),
            kana_name: non_empty(&self.kana_name),
            location: EventLocation::from_movie_theater(project, theater),
            video_format: self.video_format_type.iter().map(|f| FormatType::new(f)).collect(),
            sound_format: self.sound_format_type.iter().map(|f| FormatType::new(f)).collect(),
            work_performed: movie.clone(),
            duration: Some(duration),
            start_date,
            end_date,
            event_status: EventStatusType::EventScheduled,
            headline: Some(MultilingualString::new(&self.headline.ja, "")),
            additional_property: vec![
                PropertyValue::new(ADDITIONAL_PROPERTY_SIGNAGE_DISPLAY_NAME, &self.signage_display_name),
                PropertyValue::new(
                    ADDITIONAL_PROPERTY_SIGNAGE_DISPLAY_SUBTITLE_NAME,
                    &self.signage_dislay_subtitle_name,
                ),
                PropertyValue::new(ADDITIONAL_PROPERTY_SUMMARY_START_DAY, &self.summary_start_day),
            ],
            offers: Some(ScreeningEventSeriesOffer {
                project: Some(project.clone()),
                type_of: "Offer".to_string(),
                price_currency: PRICE_CURRENCY_JPY.to_string(),
                accepted_payment_method: Some(accepted_payment_method),
            }),
            description: Some(MultilingualString::with_empty_kr(&self.description, "")),
            subtitle_language,
            dub_language,
            unset,
        })
    }
}

/// Label of the translation of a series for list screens.
pub fn translation_type_label(attributes: &ScreeningEventSeriesAttributes) -> &'static str {
    if attributes.dub_language.is_some() {
        "Dubbed"
    } else if attributes.subtitle_language.is_some() {
        "Subtitled"
    } else {
        ""
    }
}
