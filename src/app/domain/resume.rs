use serde::{Deserialize, Serialize};

/// What to show in front of each profile field when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Prepend {
    Icon,
    Text,
    Both,
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvatarConfig {
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounded: Option<bool>,

    /// Avatar size in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobIntention {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<AvatarConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prepend: Option<Prepend>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub zhihu: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub xiaohongshu: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub wechat: Option<String>,

    /// Years of work experience, free-form (e.g. "3 years").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_exp_year: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_intention: Option<JobIntention>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,

    /// Enrollment period, usually a start/end pair.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edu_time: Option<Vec<String>>,

    /// Markdown description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edu_desc: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Persisted as "partment", the original app's (misspelled) key.
    #[serde(rename = "partment", skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_time: Option<Vec<String>>,

    /// Bullet points, markdown per line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_desc: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainWork {
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_time: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_desc: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_achievements: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_work: Option<Vec<MainWork>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Award {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// The resume data tree edited by the user.
///
/// The core treats this as an opaque, externally defined schema: it only
/// needs the document to be cloneable and round-trippable through JSON.
/// Field names match the persisted format of the original web app, so old
/// saves remain loadable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeDocument {
    pub profile: Profile,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Project>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub awards: Option<Vec<Award>>,
}

impl ResumeDocument {
    /// A fresh copy of the default template. Each call returns an
    /// independent value, so resetting never aliases a prior document.
    pub fn default_template() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_is_empty() {
        let doc = ResumeDocument::default_template();
        assert!(doc.education.is_empty());
        assert!(doc.experience.is_empty());
        assert!(doc.projects.is_none());
        assert!(doc.awards.is_none());
        assert_eq!(doc.profile.name, None);
    }

    #[test]
    fn test_templates_are_independent() {
        let mut a = ResumeDocument::default_template();
        a.education.push(EducationEntry {
            school: Some("X".to_string()),
            ..Default::default()
        });
        let b = ResumeDocument::default_template();
        assert!(b.education.is_empty());
    }

    #[test]
    fn test_serialize_deserialize() {
        let mut doc = ResumeDocument::default_template();
        doc.profile.name = Some("Ada Lovelace".to_string());
        doc.profile.work_exp_year = Some("5 years".to_string());
        doc.experience.push(ExperienceEntry {
            job_title: Some("Engineer".to_string()),
            company: Some("Analytical Engines Ltd".to_string()),
            job_desc: Some(vec!["Wrote the first program".to_string()]),
            ..Default::default()
        });

        let json = serde_json::to_string_pretty(&doc).unwrap();
        let loaded: ResumeDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, loaded);
    }

    #[test]
    fn test_camel_case_field_names() {
        let mut doc = ResumeDocument::default_template();
        doc.profile.work_exp_year = Some("3 years".to_string());
        doc.experience.push(ExperienceEntry {
            job_title: Some("Dev".to_string()),
            ..Default::default()
        });

        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("\"workExpYear\""));
        assert!(json.contains("\"jobTitle\""));
    }

    #[test]
    fn test_original_save_survives_resave() {
        // Keys only the original web editor writes must not be dropped or
        // renamed when we load and save again.
        let json = r#"{
            "profile": {
                "name": "Li Lei",
                "zhihu": "https://zhihu.com/people/lilei",
                "xiaohongshu": "https://xiaohongshu.com/user/lilei",
                "wechat": "lilei_wx"
            },
            "education": [],
            "experience": [
                {"jobTitle": "Engineer", "partment": "R&D"}
            ]
        }"#;
        let doc: ResumeDocument = serde_json::from_str(json).unwrap();
        assert_eq!(
            doc.profile.zhihu.as_deref(),
            Some("https://zhihu.com/people/lilei")
        );
        assert_eq!(doc.profile.wechat.as_deref(), Some("lilei_wx"));
        assert_eq!(doc.experience[0].department.as_deref(), Some("R&D"));

        let resaved = serde_json::to_string(&doc).unwrap();
        for key in ["\"zhihu\"", "\"xiaohongshu\"", "\"wechat\"", "\"partment\""] {
            assert!(resaved.contains(key), "{key} lost on re-save");
        }
        assert!(!resaved.contains("\"department\""));

        let reloaded: ResumeDocument = serde_json::from_str(&resaved).unwrap();
        assert_eq!(reloaded, doc);
    }

    #[test]
    fn test_loads_original_app_save() {
        // Shape produced by the original web editor
        let json = r#"{
            "profile": {
                "name": "Jane",
                "prepend": "icon",
                "jobIntention": {"position": "Backend Engineer"}
            },
            "education": [
                {"school": "MIT", "eduTime": ["2018", "2022"]}
            ],
            "experience": [],
            "awards": [{"title": "Dean's List"}]
        }"#;
        let doc: ResumeDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.profile.prepend, Some(Prepend::Icon));
        assert_eq!(doc.education[0].school.as_deref(), Some("MIT"));
        assert_eq!(
            doc.profile.job_intention.as_ref().unwrap().position.as_deref(),
            Some("Backend Engineer")
        );
        assert_eq!(doc.awards.as_ref().unwrap()[0].title, "Dean's List");
    }
}
