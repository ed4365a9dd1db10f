//! 데이터셋 병합 서비스
//!
//! 문서별 부분 데이터셋을 하나의 데이터셋으로 모은다.
//! 새 과목은 통째로 추가하고, 이미 있는 과목은 주제 단위로 합친다.

use crate::config::MergePolicy;
use crate::models::Dataset;
use std::collections::btree_map::Entry;
use tracing::debug;

/// 실행 내내 누적 데이터셋을 소유하는 병합기
#[derive(Debug, Default)]
pub struct DatasetMerger {
    dataset: Dataset,
    policy: MergePolicy,
}

impl DatasetMerger {
    pub fn new(policy: MergePolicy) -> Self {
        Self {
            dataset: Dataset::new(),
            policy,
        }
    }

    /// 문서 하나의 결과를 합친다
    pub fn merge(&mut self, incoming: Dataset) {
        merge_into(&mut self.dataset, incoming, self.policy);
    }

    /// 지금까지 합친 데이터셋 (읽기 전용)
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// 누적 데이터셋을 넘겨주고 병합기를 끝낸다
    pub fn finish(self) -> Dataset {
        self.dataset
    }
}

/// `merge(accumulated, incoming) -> accumulated'`
pub fn merge(mut accumulated: Dataset, incoming: Dataset, policy: MergePolicy) -> Dataset {
    merge_into(&mut accumulated, incoming, policy);
    accumulated
}

fn merge_into(accumulated: &mut Dataset, incoming: Dataset, policy: MergePolicy) {
    for (subject_id, incoming_subject) in incoming.into_subjects() {
        match accumulated.subjects_mut().entry(subject_id) {
            Entry::Vacant(slot) => {
                slot.insert(incoming_subject);
            }
            Entry::Occupied(mut slot) => {
                let existing = slot.get_mut();
                if existing.name.is_empty() {
                    existing.name = incoming_subject.name;
                }

                for (topic_name, topic) in incoming_subject.topics {
                    match policy {
                        MergePolicy::Append => {
                            existing
                                .topics
                                .entry(topic_name)
                                .or_default()
                                .sets
                                .extend(topic.sets);
                        }
                        MergePolicy::Overwrite => {
                            if existing.topics.insert(topic_name.clone(), topic).is_some() {
                                debug!("주제 '{}' 를 새 문서의 세트로 교체했습니다", topic_name);
                            }
                        }
                    }
                }
            }
        }
    }
}
