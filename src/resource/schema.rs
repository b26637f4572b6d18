use super::ServiceQuotaState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
    Float,
}

/// How the host orchestrator should treat one attribute of the binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSchema {
    pub name: &'static str,
    pub kind: AttributeType,
    pub required: bool,
    pub computed: bool,
    /// A change replaces the binding instead of updating it.
    pub force_new: bool,
}

impl AttributeSchema {
    const fn required(name: &'static str, kind: AttributeType, force_new: bool) -> Self {
        Self {
            name,
            kind,
            required: true,
            computed: false,
            force_new,
        }
    }

    const fn computed(name: &'static str) -> Self {
        Self {
            name,
            kind: AttributeType::String,
            required: false,
            computed: true,
            force_new: false,
        }
    }
}

pub const SERVICE_QUOTA_ATTRIBUTES: &[AttributeSchema] = &[
    AttributeSchema::required("quota_code", AttributeType::String, true),
    AttributeSchema::computed("request_id"),
    AttributeSchema::computed("request_status"),
    AttributeSchema::required("service_code", AttributeType::String, true),
    AttributeSchema::required("value", AttributeType::Float, false),
];

/// Attribute descriptors plus the capabilities of the resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceSchema {
    pub type_name: &'static str,
    pub attributes: &'static [AttributeSchema],
    /// Import accepts the composite id as-is.
    pub import_passthrough: bool,
    /// Delete never touches the remote side.
    pub delete_is_noop: bool,
}

impl ResourceSchema {
    pub fn attribute(&self, name: &str) -> Option<&AttributeSchema> {
        self.attributes.iter().find(|attr| attr.name == name)
    }
}

pub const SERVICE_QUOTA_SCHEMA: ResourceSchema = ResourceSchema {
    type_name: "aws_servicequotas_service_quota",
    attributes: SERVICE_QUOTA_ATTRIBUTES,
    import_passthrough: true,
    delete_is_noop: true,
};

/// Lifecycle action the host should run to converge on a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlannedAction {
    Create,
    Update,
    Replace,
    NoOp,
}

/// Compares prior state with the desired configuration.
///
/// `desired` carries only configuration fields; its computed fields are ignored.
pub fn plan(prior: Option<&ServiceQuotaState>, desired: &ServiceQuotaState) -> PlannedAction {
    let Some(prior) = prior else {
        return PlannedAction::Create;
    };
    if prior.service_code != desired.service_code || prior.quota_code != desired.quota_code {
        return PlannedAction::Replace;
    }
    if prior.value != desired.value {
        PlannedAction::Update
    } else {
        PlannedAction::NoOp
    }
}
