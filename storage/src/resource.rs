//! Typed resource names used by the storage services.
//!
//! Every type formats with [`std::fmt::Display`] and parses with [`std::str::FromStr`].
//! A `{x=**}` segment in a template matches the rest of the name, slashes included.

use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{name} does not match {template}")]
    InvalidName { name: String, template: &'static str },
}

/// Captures the variable segments of `name` according to `template`.
fn capture<'a>(template: &'static str, name: &'a str) -> Result<Vec<&'a str>, Error> {
    let invalid = || Error::InvalidName {
        name: name.to_string(),
        template,
    };
    let mut captured = vec![];
    let mut rest = name;
    let mut parts = template.split('/').peekable();
    while let Some(part) = parts.next() {
        let is_last = parts.peek().is_none();
        if part.starts_with('{') {
            if part.ends_with("=**}") {
                if !is_last || rest.is_empty() {
                    return Err(invalid());
                }
                captured.push(rest);
                return Ok(captured);
            }
            let (value, remaining) = match rest.split_once('/') {
                Some((v, r)) if !is_last => (v, r),
                None if is_last => (rest, ""),
                _ => return Err(invalid()),
            };
            if value.is_empty() {
                return Err(invalid());
            }
            captured.push(value);
            rest = remaining;
        } else {
            rest = match rest.split_once('/') {
                Some((literal, remaining)) if literal == part && !is_last => remaining,
                None if rest == part && is_last => "",
                _ => return Err(invalid()),
            };
        }
    }
    Ok(captured)
}

macro_rules! resource_name {
    ($(#[$meta:meta])* $name:ident, $template:literal, $format:literal, { $($field:ident),+ }) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub struct $name {
            $(pub $field: String,)+
        }

        impl $name {
            pub const TEMPLATE: &'static str = $template;

            pub fn new($($field: impl Into<String>),+) -> Self {
                Self { $($field: $field.into(),)+ }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, $format, $($field = self.$field),+)
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let mut values = capture($template, s)?.into_iter();
                Ok(Self {
                    $($field: values.next().unwrap_or_default().to_string(),)+
                })
            }
        }
    };
}

resource_name!(
    /// Parent of bucket and HMAC key listings.
    ProjectName,
    "projects/{project}",
    "projects/{project}",
    { project }
);

resource_name!(
    /// `project` is `_` for globally addressed buckets.
    BucketName,
    "projects/{project}/buckets/{bucket}",
    "projects/{project}/buckets/{bucket}",
    { project, bucket }
);

resource_name!(
    FolderName,
    "projects/{project}/buckets/{bucket}/folders/{folder=**}",
    "projects/{project}/buckets/{bucket}/folders/{folder}",
    { project, bucket, folder }
);

resource_name!(
    ManagedFolderName,
    "projects/{project}/buckets/{bucket}/managedFolders/{managed_folder=**}",
    "projects/{project}/buckets/{bucket}/managedFolders/{managed_folder}",
    { project, bucket, managed_folder }
);

resource_name!(
    AnywhereCacheName,
    "projects/{project}/buckets/{bucket}/anywhereCaches/{anywhere_cache}",
    "projects/{project}/buckets/{bucket}/anywhereCaches/{anywhere_cache}",
    { project, bucket, anywhere_cache }
);

resource_name!(
    NotificationConfigName,
    "projects/{project}/buckets/{bucket}/notificationConfigs/{notification_config}",
    "projects/{project}/buckets/{bucket}/notificationConfigs/{notification_config}",
    { project, bucket, notification_config }
);

resource_name!(
    StorageLayoutName,
    "projects/{project}/buckets/{bucket}/storageLayout",
    "projects/{project}/buckets/{bucket}/storageLayout",
    { project, bucket }
);

macro_rules! bucket_children {
    ($($name:ident),+) => {
        $(
            impl $name {
                pub fn bucket_name(&self) -> BucketName {
                    BucketName::new(self.project.as_str(), self.bucket.as_str())
                }
            }
        )+
    };
}

bucket_children!(FolderName, ManagedFolderName, AnywhereCacheName, NotificationConfigName, StorageLayoutName);

const PROJECT_INTELLIGENCE_CONFIG: &str = "projects/{project}/locations/{location}/intelligenceConfig";
const FOLDER_INTELLIGENCE_CONFIG: &str = "folders/{folder}/locations/{location}/intelligenceConfig";
const ORGANIZATION_INTELLIGENCE_CONFIG: &str = "organizations/{org}/locations/{location}/intelligenceConfig";

/// Storage Intelligence configs live on a project, a folder or an organization.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum IntelligenceConfigName {
    Project { project: String, location: String },
    Folder { folder: String, location: String },
    Organization { org: String, location: String },
}

impl fmt::Display for IntelligenceConfigName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Project { project, location } => {
                write!(f, "projects/{project}/locations/{location}/intelligenceConfig")
            }
            Self::Folder { folder, location } => write!(f, "folders/{folder}/locations/{location}/intelligenceConfig"),
            Self::Organization { org, location } => {
                write!(f, "organizations/{org}/locations/{location}/intelligenceConfig")
            }
        }
    }
}

impl FromStr for IntelligenceConfigName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = |template: &'static str| capture(template, s).map(|v| (v[0].to_string(), v[1].to_string()));
        match s.split('/').next() {
            Some("projects") => {
                let (project, location) = values(PROJECT_INTELLIGENCE_CONFIG)?;
                Ok(Self::Project { project, location })
            }
            Some("folders") => {
                let (folder, location) = values(FOLDER_INTELLIGENCE_CONFIG)?;
                Ok(Self::Folder { folder, location })
            }
            Some("organizations") => {
                let (org, location) = values(ORGANIZATION_INTELLIGENCE_CONFIG)?;
                Ok(Self::Organization { org, location })
            }
            _ => Err(Error::InvalidName {
                name: s.to_string(),
                template: PROJECT_INTELLIGENCE_CONFIG,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::resource::{
        AnywhereCacheName, BucketName, Error, FolderName, IntelligenceConfigName, ManagedFolderName,
        NotificationConfigName, ProjectName, StorageLayoutName,
    };

    #[test]
    fn test_bucket_name() {
        let name = BucketName::new("_", "my-bucket");
        assert_eq!(name.to_string(), "projects/_/buckets/my-bucket");
        assert_eq!("projects/_/buckets/my-bucket".parse::<BucketName>().unwrap(), name);

        for invalid in [
            "projects/_/buckets/",
            "projects/_/buckets/b/extra",
            "projects//buckets/b",
            "buckets/b",
            "",
        ] {
            assert!(invalid.parse::<BucketName>().is_err(), "{invalid}");
        }
        assert_eq!(
            "buckets/b".parse::<BucketName>().unwrap_err(),
            Error::InvalidName {
                name: "buckets/b".to_string(),
                template: BucketName::TEMPLATE,
            }
        );
        assert_eq!("projects/p".parse::<ProjectName>().unwrap().project, "p");
    }

    #[test]
    fn test_multi_segment_names() {
        let folder: FolderName = "projects/_/buckets/b/folders/a/b/c/".parse().unwrap();
        assert_eq!(folder.folder, "a/b/c/");
        assert_eq!(folder.bucket_name().to_string(), "projects/_/buckets/b");
        assert_eq!(folder.to_string(), "projects/_/buckets/b/folders/a/b/c/");
        assert!("projects/_/buckets/b/folders/".parse::<FolderName>().is_err());

        let managed: ManagedFolderName = "projects/_/buckets/b/managedFolders/m/n/".parse().unwrap();
        assert_eq!(managed.managed_folder, "m/n/");
    }

    #[test]
    fn test_single_segment_children() {
        let cache = AnywhereCacheName::new("_", "b", "us-central1-a");
        assert_eq!(cache.to_string(), "projects/_/buckets/b/anywhereCaches/us-central1-a");
        assert_eq!(cache.to_string().parse::<AnywhereCacheName>().unwrap(), cache);
        assert!("projects/_/buckets/b/anywhereCaches/a/b".parse::<AnywhereCacheName>().is_err());

        let notification: NotificationConfigName = "projects/_/buckets/b/notificationConfigs/7".parse().unwrap();
        assert_eq!(notification.notification_config, "7");

        let layout: StorageLayoutName = "projects/_/buckets/b/storageLayout".parse().unwrap();
        assert_eq!(layout.bucket, "b");
        assert!("projects/_/buckets/b/storageLayout/x".parse::<StorageLayoutName>().is_err());
        assert!("projects/_/buckets/b/layout".parse::<StorageLayoutName>().is_err());
    }

    #[test]
    fn test_intelligence_config_name() {
        let name: IntelligenceConfigName = "folders/123/locations/global/intelligenceConfig".parse().unwrap();
        assert_eq!(
            name,
            IntelligenceConfigName::Folder {
                folder: "123".to_string(),
                location: "global".to_string()
            }
        );
        assert_eq!(name.to_string(), "folders/123/locations/global/intelligenceConfig");

        let name: IntelligenceConfigName = "organizations/9/locations/global/intelligenceConfig".parse().unwrap();
        assert!(matches!(name, IntelligenceConfigName::Organization { .. }));
        assert!("projects/p/locations/global".parse::<IntelligenceConfigName>().is_err());
        assert!("billingAccounts/1/locations/global/intelligenceConfig"
            .parse::<IntelligenceConfigName>()
            .is_err());
    }
}
