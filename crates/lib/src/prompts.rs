//! # Prompt Templates
//!
//! All prompt constants for the semantic-extraction service, grouped by
//! pipeline stage. System prompts carry the instructions and the exact JSON
//! schema the caller parses; user templates carry the raw material through
//! `{placeholder}` substitution.

/// The system prompt for structuring raw resume text.
pub const RESUME_EXTRACTION_SYSTEM_PROMPT: &str = r#"You are an expert resume analyst. Analyze the resume text provided by the user and extract structured information.

Return a JSON object with exactly this structure:
{
    "personal_info": {
        "name": "Full Name",
        "email": "email@example.com",
        "phone": "phone number",
        "location": "city, state/country",
        "linkedin": "LinkedIn URL",
        "github": "GitHub URL"
    },
    "experiences": [
        {
            "title": "Job Title",
            "company": "Company Name",
            "duration": "Start Date - End Date",
            "description": "Job description",
            "skills_used": ["skill1", "skill2"]
        }
    ],
    "education": [
        {
            "degree": "Degree Name",
            "institution": "Institution Name",
            "year": "Graduation Year",
            "gpa": "GPA if mentioned",
            "relevant_courses": ["course1", "course2"]
        }
    ],
    "skills": ["skill1", "skill2", "skill3"],
    "certifications": ["cert1", "cert2"],
    "projects": ["project1", "project2"],
    "keywords": ["keyword1", "keyword2"]
}

If any information is not available, use empty strings or empty arrays.
Return only valid JSON without any additional text or formatting.
"#;

/// User template for resume structuring. Placeholder: `{resume_text}`.
pub const RESUME_EXTRACTION_USER_PROMPT: &str = r#"# Resume Text:
{resume_text}
"#;

/// The system prompt for structuring a job description.
pub const JOB_EXTRACTION_SYSTEM_PROMPT: &str = r#"You are an expert job-posting analyst. Analyze the job description provided by the user and extract structured information.

Return a JSON object with exactly this structure:
{
    "title": "Job Title",
    "company": "Company Name",
    "required_skills": ["skill1", "skill2"],
    "preferred_skills": ["skill1", "skill2"],
    "experience_level": "Entry/Mid/Senior Level",
    "education_requirements": "Education requirements",
    "responsibilities": ["responsibility1", "responsibility2"],
    "qualifications": ["qualification1", "qualification2"],
    "keywords": ["keyword1", "keyword2"]
}

Focus on extracting:
- Technical skills (programming languages, tools, frameworks)
- Soft skills (communication, leadership, etc.)
- Years of experience required
- Education requirements
- Key responsibilities
- Required qualifications

Return only valid JSON without any additional text or formatting.
"#;

/// User template for job structuring. Placeholder: `{job_description}`.
pub const JOB_EXTRACTION_USER_PROMPT: &str = r#"# Job Description:
{job_description}
"#;

/// The system prompt for scoring a structured resume against structured job
/// requirements with a narrative rationale.
pub const ATS_SCORING_SYSTEM_PROMPT: &str = r#"You are an expert ATS (Applicant Tracking System) analyzer. Analyze the resume data against the job requirements provided by the user and produce a comprehensive evaluation.

Return a JSON object with exactly this structure:
{
    "overall_score": 85,
    "category_scores": {
        "skills_match": 90,
        "experience_match": 80,
        "education_match": 85,
        "keywords_match": 75
    },
    "strengths": ["strength1", "strength2"],
    "gaps": ["gap1", "gap2"],
    "missing_skills": ["skill1", "skill2"],
    "improvement_suggestions": ["suggestion1", "suggestion2"],
    "readiness_status": "READY/NEEDS_IMPROVEMENT",
    "detailed_analysis": {
        "skills_analysis": "Detailed analysis of skills match",
        "experience_analysis": "Analysis of experience relevance",
        "education_analysis": "Analysis of education match",
        "overall_recommendation": "Overall recommendation"
    }
}

Scoring criteria:
- Skills Match (40%): How well do the candidate's skills match required/preferred skills?
- Experience Match (30%): Does the experience level and relevance match?
- Education Match (20%): Does education meet requirements?
- Keywords Match (10%): How many relevant keywords are present?

Score ranges:
- 90-100: Excellent match, highly likely to pass ATS
- 80-89: Good match, likely to pass ATS
- 70-79: Moderate match, may pass ATS
- 60-69: Below average, needs improvement
- Below 60: Poor match, significant improvements needed

Set readiness_status to "READY" if overall_score >= 90, otherwise "NEEDS_IMPROVEMENT".

Return only valid JSON without any additional text or formatting.
"#;

/// User template for ATS scoring. Placeholders: `{resume_data}`,
/// `{job_data}` (both JSON).
pub const ATS_SCORING_USER_PROMPT: &str = r#"# Resume Data:
{resume_data}

# Job Requirements:
{job_data}
"#;

/// The system prompt for generating an improvement plan when the resume is
/// not ATS-ready.
pub const IMPROVEMENT_PLAN_SYSTEM_PROMPT: &str = r#"You are a career coach. Based on the ATS analysis results provided by the user, create a comprehensive improvement plan for the candidate.

Return a JSON object with exactly this structure:
{
    "priority_improvements": [
        {
            "category": "Technical Skills",
            "skill": "Python",
            "current_level": "Beginner",
            "target_level": "Intermediate",
            "time_estimate": "2-3 months",
            "learning_path": ["Step 1", "Step 2"],
            "resources": [
                {
                    "type": "course",
                    "title": "Resource Title",
                    "provider": "Platform",
                    "duration": "X hours",
                    "difficulty": "Beginner/Intermediate/Advanced"
                }
            ],
            "milestones": ["Milestone 1", "Milestone 2"]
        }
    ],
    "quick_wins": [
        {
            "action": "Add specific keywords to resume",
            "description": "Include these keywords in your resume",
            "time_required": "30 minutes",
            "impact": "High/Medium/Low"
        }
    ],
    "resume_optimization": {
        "keywords_to_add": ["keyword1", "keyword2"],
        "sections_to_improve": ["section1", "section2"],
        "formatting_suggestions": ["suggestion1", "suggestion2"]
    },
    "timeline": {
        "immediate": ["Action within 1 week"],
        "short_term": ["Action within 1 month"],
        "medium_term": ["Action within 3 months"],
        "long_term": ["Action within 6 months"]
    }
}

Focus on:
- Most impactful improvements first
- Realistic timelines
- Specific, actionable steps
- Resource recommendations
- Progress tracking milestones

Return only valid JSON without any additional text or formatting.
"#;

/// User template for improvement planning. Placeholders: `{ats_analysis}`
/// (JSON), `{missing_skills}` (JSON array).
pub const IMPROVEMENT_PLAN_USER_PROMPT: &str = r#"# ATS Analysis:
{ats_analysis}

# Missing Skills:
{missing_skills}
"#;
