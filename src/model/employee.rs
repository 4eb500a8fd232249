use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

use super::de::{lenient, null_as_default};

/// Row of `GET /api/pegawai`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pegawai {
    pub id_pegawai: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nama_pegawai: String,
    #[serde(default)]
    pub nip: Option<String>,
    #[serde(default)]
    pub nidn: Option<String>,
    #[serde(default)]
    pub nuptk: Option<String>,
    #[serde(default)]
    pub alamat: Option<String>,
    #[serde(default)]
    pub foto: Option<String>,
}

/// Editable subset of an employee, sent on create, update and profile save.
/// Absent fields are left out of the request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PegawaiEditData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_pegawai: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nama_pegawai: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nidn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nuptk: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alamat: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foto: Option<String>,
}

impl PegawaiEditData {
    /// Name and NIP must be non-blank before anything is sent.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let filled = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        if filled(&self.nama_pegawai) && filled(&self.nip) {
            Ok(())
        } else {
            Err(ValidationError::MissingPegawaiIdentity)
        }
    }
}

impl From<&Pegawai> for PegawaiEditData {
    fn from(p: &Pegawai) -> Self {
        Self {
            id_pegawai: Some(p.id_pegawai),
            nama_pegawai: Some(p.nama_pegawai.clone()),
            nip: p.nip.clone(),
            nidn: p.nidn.clone(),
            nuptk: p.nuptk.clone(),
            alamat: p.alamat.clone(),
            foto: p.foto.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JabatanStruktural {
    pub id_jabatan_struktural: u64,
    pub nama_jabatan_struktural: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JabatanFungsional {
    pub id_jabatan_fungsional: u64,
    pub nama_jabatan_fungsional: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelPendidikan {
    pub id_level_pendidikan: u64,
    pub nama_level_pendidikan: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiwayatPendidikan {
    pub id_riwayat_pendidikan: u64,
    pub id_pegawai: u64,
    #[serde(default)]
    pub thn_masuk: Option<serde_json::Value>,
    #[serde(default)]
    pub thn_lulus: Option<serde_json::Value>,
    #[serde(default)]
    pub tempat: Option<String>,
    pub simpeg_level_pendidikan: Option<LevelPendidikan>,
}

/// Employee detail nested in the login response (`user.pegawai`).
///
/// Every field is optional: the login shape and the employee list shape
/// disagree on names (`id`/`nama` here, `id_pegawai`/`nama_pegawai` there)
/// and neither is mapped onto the other. A field of the wrong type reads as
/// `None` without affecting the others.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PegawaiDetail {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub id_pegawai: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub nip: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub nama: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub status: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub jk: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pub alamat: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub email_poliban: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub foto: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub handphone: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub kota: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub kode_pos: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub nidn: Option<String>,
    #[serde(rename = "NUPTK", deserialize_with = "lenient")]
    pub nuptk: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub tempat_lahir: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub tgl_lahir: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub simpeg_jabatan_struktural: Option<JabatanStruktural>,
    #[serde(deserialize_with = "lenient")]
    pub simpeg_jabatan_fungsional: Option<JabatanFungsional>,
    #[serde(deserialize_with = "lenient")]
    pub simpeg_riwayat_pendidikan: Option<Vec<RiwayatPendidikan>>,
}

impl PegawaiDetail {
    /// Structural position if any, otherwise the functional one.
    pub fn jabatan(&self) -> Option<&str> {
        self.simpeg_jabatan_struktural
            .as_ref()
            .map(|j| j.nama_jabatan_struktural.as_str())
            .or_else(|| {
                self.simpeg_jabatan_fungsional
                    .as_ref()
                    .map(|j| j.nama_jabatan_fungsional.as_str())
            })
    }
}
