//! Employee list with paging, selection and the add/edit form.
//!
//! Fetching is split into [`EmployeeListScreen::fetch`] and
//! [`EmployeeListScreen::apply`]. Overlapping fetches are neither
//! deduplicated nor cancelled: whichever result is applied last is shown.

use std::collections::BTreeSet;

use futures::future::join_all;
use tracing::{error, info};

use crate::api;
use crate::app::AppContext;
use crate::error::RequestError;
use crate::model::employee::{Pegawai, PegawaiEditData};

use super::state::{LoadState, Notice};

pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeForm {
    pub mode: FormMode,
    pub data: PegawaiEditData,
}

#[derive(Debug, Default)]
pub struct EmployeeListScreen {
    pub list: LoadState<Vec<Pegawai>>,
    page: usize,
    selected: BTreeSet<u64>,
    form: Option<EmployeeForm>,
    saving: bool,
}

impl EmployeeListScreen {
    pub fn new() -> Self {
        Self {
            page: 1,
            ..Self::default()
        }
    }

    pub async fn fetch(ctx: &AppContext) -> Result<Vec<Pegawai>, RequestError> {
        api::employee::list(&ctx.client).await
    }

    /// Shows a fetch result. A failure empties the list and returns the alert.
    pub fn apply(&mut self, result: Result<Vec<Pegawai>, RequestError>) -> Option<Notice> {
        match result {
            Ok(rows) => {
                self.list = LoadState::Loaded(rows);
                self.page = self.page.clamp(1, self.total_pages().max(1));
                None
            }
            Err(e) => {
                error!(error = %e, "Error fetching pegawai");
                let message = fetch_error_message(&e);
                self.list = LoadState::Failed(message.clone());
                Some(Notice::error(message))
            }
        }
    }

    pub async fn refresh(&mut self, ctx: &AppContext) -> Option<Notice> {
        self.list = LoadState::Loading;
        let result = Self::fetch(ctx).await;
        self.apply(result)
    }

    pub fn rows(&self) -> &[Pegawai] {
        self.list.data().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn total(&self) -> usize {
        self.rows().len()
    }

    pub fn total_pages(&self) -> usize {
        self.total().div_ceil(PAGE_SIZE)
    }

    pub fn current_page(&self) -> usize {
        self.page.max(1)
    }

    pub fn page_rows(&self) -> &[Pegawai] {
        let rows = self.rows();
        let start = ((self.current_page() - 1) * PAGE_SIZE).min(rows.len());
        let end = (start + PAGE_SIZE).min(rows.len());
        &rows[start..end]
    }

    pub fn goto_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages().max(1));
        self.selected.clear();
    }

    pub fn previous_page(&mut self) {
        if self.current_page() > 1 {
            self.goto_page(self.current_page() - 1);
        }
    }

    pub fn next_page(&mut self) {
        if self.current_page() < self.total_pages() {
            self.goto_page(self.current_page() + 1);
        }
    }

    pub fn selected(&self) -> &BTreeSet<u64> {
        &self.selected
    }

    pub fn toggle_select(&mut self, id_pegawai: u64) {
        if !self.selected.remove(&id_pegawai) {
            self.selected.insert(id_pegawai);
        }
    }

    /// Selects every loaded employee, or clears the selection if all are selected.
    pub fn select_all(&mut self) {
        if self.selected.len() == self.total() {
            self.selected.clear();
        } else {
            self.selected = self.rows().iter().map(|p| p.id_pegawai).collect();
        }
    }

    pub fn form(&self) -> Option<&EmployeeForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut PegawaiEditData> {
        self.form.as_mut().map(|f| &mut f.data)
    }

    pub fn open_add(&mut self) {
        self.form = Some(EmployeeForm {
            mode: FormMode::Add,
            data: PegawaiEditData::default(),
        });
    }

    pub fn open_edit(&mut self, pegawai: &Pegawai) {
        self.form = Some(EmployeeForm {
            mode: FormMode::Edit,
            data: PegawaiEditData::from(pegawai),
        });
    }

    pub fn close_form(&mut self) {
        self.form = None;
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Submits the open form. Blank name or NIP is rejected before any request.
    pub async fn save(&mut self, ctx: &AppContext) -> Option<Notice> {
        let form = self.form.clone()?;
        if let Err(e) = form.data.validate() {
            return Some(Notice::error(e.to_string()));
        }

        self.saving = true;
        let result = match (form.mode, form.data.id_pegawai) {
            (FormMode::Edit, Some(id)) => api::employee::update(&ctx.client, id, &form.data)
                .await
                .map(|_| "Data pegawai berhasil diperbarui"),
            _ => api::employee::create(&ctx.client, &form.data)
                .await
                .map(|_| "Data pegawai berhasil ditambahkan"),
        };
        self.saving = false;

        match result {
            Ok(message) => {
                info!(mode = ?form.mode, id_pegawai = ?form.data.id_pegawai, "Pegawai saved");
                self.form = None;
                // a failed reload stays visible through `list`
                self.refresh(ctx).await;
                Some(Notice::success(message))
            }
            Err(e) => {
                error!(error = %e, "Error saving pegawai");
                Some(Notice::error("Gagal menyimpan data pegawai"))
            }
        }
    }

    /// Uploads a photo and puts the stored file name into the open form.
    pub async fn upload_photo(&mut self, ctx: &AppContext, jpeg: Vec<u8>) -> Option<Notice> {
        self.form.as_ref()?;
        match ctx.client.upload_photo(jpeg, "photo.jpg").await {
            Ok(file_name) => {
                if let Some(data) = self.form_mut() {
                    data.foto = Some(file_name);
                }
                Some(Notice::success("Foto berhasil diupload"))
            }
            Err(e) => {
                error!(error = %e, "Error uploading image");
                Some(Notice::error("Gagal mengupload foto. Silakan coba lagi."))
            }
        }
    }

    pub async fn delete(&mut self, ctx: &AppContext, id_pegawai: u64) -> Notice {
        match api::employee::delete(&ctx.client, id_pegawai).await {
            Ok(_) => {
                info!(id_pegawai, "Pegawai deleted");
                self.selected.remove(&id_pegawai);
                self.refresh(ctx).await;
                Notice::success("Pegawai berhasil dihapus")
            }
            Err(e) => {
                error!(error = %e, id_pegawai, "Error deleting pegawai");
                Notice::error("Gagal menghapus pegawai")
            }
        }
    }

    /// Deletes every selected employee concurrently.
    pub async fn bulk_delete(&mut self, ctx: &AppContext) -> Notice {
        if self.selected.is_empty() {
            return Notice::info("Tidak ada pegawai yang dipilih untuk dihapus.");
        }

        let ids: Vec<u64> = self.selected.iter().copied().collect();
        let results = join_all(ids.iter().map(|id| api::employee::delete(&ctx.client, *id))).await;
        let failed = results.iter().filter(|r| r.is_err()).count();

        if failed > 0 {
            error!(failed, total = ids.len(), "Error deleting multiple pegawai");
            self.refresh(ctx).await;
            return Notice::error("Gagal menghapus beberapa pegawai.");
        }

        info!(count = ids.len(), "Pegawai bulk deleted");
        self.selected.clear();
        self.refresh(ctx).await;
        Notice::success(format!("{} pegawai berhasil dihapus", ids.len()))
    }
}

fn fetch_error_message(err: &RequestError) -> String {
    match err {
        RequestError::Status { status, message } => message
            .clone()
            .unwrap_or_else(|| format!("Server error: {}", status.as_u16())),
        RequestError::Transport(_) => "Tidak dapat terhubung ke server".to_string(),
        RequestError::Decode(message) => message.clone(),
        RequestError::Storage(_) => "Gagal mengambil data pegawai".to_string(),
    }
}
