use crate::validators::{self, alphanumeric, append_validation_error};
use validator::{Validate, ValidationErrors};

#[derive(Debug, Default, Deserialize, Serialize, Validate)]
pub struct NewBoxOfficeType {
    #[serde(default)]
    #[validate(
        length(max = 64, message = "Code must be 64 characters or fewer"),
        custom = "alphanumeric"
    )]
    pub id: String,
    #[serde(default)]
    #[validate(length(max = 64, message = "Name must be 64 characters or fewer"))]
    pub name: String,
}

impl NewBoxOfficeType {
    pub fn validate_record(&self) -> Result<(), ValidationErrors> {
        let mut validation_errors = self.validate();
        validation_errors = append_validation_error(
            validation_errors,
            "id",
            validators::required(&self.id, "Code is required"),
        );
        append_validation_error(
            validation_errors,
            "name",
            validators::required(&self.name, "Name is required"),
        )
    }
}

#[derive(Debug, Default, Deserialize, Serialize, Validate)]
pub struct BoxOfficeTypeUpdate {
    #[serde(default)]
    #[validate(length(max = 64, message = "Name must be 64 characters or fewer"))]
    pub name: String,
}

impl BoxOfficeTypeUpdate {
    pub fn validate_record(&self) -> Result<(), ValidationErrors> {
        append_validation_error(
            self.validate(),
            "name",
            validators::required(&self.name, "Name is required"),
        )
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct BoxOfficeTypeListParameters {
    pub id: Option<String>,
    pub name: Option<String>,
}
